//! Ports - Abstraction Layer
//!
//! This crate defines ports (traits) that represent the interfaces
//! between the application layer and the outside world. Inbound ports
//! are called by transport adapters; outbound ports are implemented by
//! infrastructure adapters.

pub mod calculation_repository;
pub mod calculator;

pub use crate::calculation_repository::{CalculationRepository, RepositoryError};
pub use crate::calculator::CalculatorPort;

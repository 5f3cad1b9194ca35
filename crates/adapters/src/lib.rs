//! Adapters - Infrastructure Implementations
//!
//! This crate contains the implementations of the ports defined in
//! calcd-ports, plus the unified application configuration.

pub mod config;
pub mod postgres;
pub mod repositories;

pub use crate::config::{AppConfig, ConfigError};
pub use crate::postgres::PostgresCalculationRepository;
pub use crate::repositories::InMemoryCalculationRepository;

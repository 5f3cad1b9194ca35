//! Domain Core - Business Logic and Shared Types
//!
//! This crate contains the calculation domain entity and the domain
//! error type shared across layers.

pub mod calculation;
pub mod error;

pub use crate::calculation::{Calculation, Operation};
pub use crate::error::CalcError;
pub use chrono::{DateTime, Utc};
pub use uuid::Uuid;

/// Result type alias for domain operations
pub type Result<T, E = CalcError> = std::result::Result<T, E>;

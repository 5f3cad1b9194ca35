//! Error types shared across the system

use thiserror::Error;

/// Base error type for calculation operations
///
/// The two variants map to distinct wire classes: `InvalidInput` is a
/// caller mistake (400 / InvalidArgument, original message surfaced),
/// `Persistence` is an internal failure (500 / Internal, generic
/// message on the wire, full detail only in logs).
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("persistence error: {0}")]
    Persistence(String),
}

impl CalcError {
    pub fn division_by_zero() -> Self {
        Self::InvalidInput("cannot divide by zero".to_string())
    }

    /// Whether the caller can fix this error by changing the request
    pub fn is_client_error(&self) -> bool {
        matches!(self, CalcError::InvalidInput(_))
    }
}

//! Calculation Repository Port
//!
//! Defines the interface for calculation persistence. The domain
//! service depends on this, never on a concrete database client.

use async_trait::async_trait;
use calcd_core::{CalcError, Calculation};

/// Calculation repository port
///
/// `save` performs a single durable write with no partial visibility:
/// either the record is stored and returned with `id` and `created_at`
/// stamped by the store, or an error is returned and nothing is
/// observable.
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    /// Persist a calculation and return the stamped record
    async fn save(&self, calculation: &Calculation) -> Result<Calculation, RepositoryError>;
}

/// Calculation repository error
#[derive(thiserror::Error, Debug)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<RepositoryError> for CalcError {
    fn from(err: RepositoryError) -> Self {
        CalcError::Persistence(err.to_string())
    }
}

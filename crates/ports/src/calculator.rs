//! Calculator Inbound Port
//!
//! The capability set transport adapters call into. Both the gRPC and
//! the REST adapter depend on this trait, never on the concrete
//! domain service, so the domain logic can be decorated or replaced
//! without touching the adapters.

use async_trait::async_trait;
use calcd_core::{CalcError, Calculation};

/// Driving port for the calculation service
///
/// Cancellation rides on the async runtime: when a caller disconnects
/// the adapter drops the operation future, which aborts any in-flight
/// persistence call.
#[async_trait]
pub trait CalculatorPort: Send + Sync {
    /// Add two integers and persist the result
    async fn add(&self, a: i32, b: i32) -> Result<Calculation, CalcError>;

    /// Divide two integers and persist the result
    ///
    /// # Errors
    /// Returns `CalcError::InvalidInput` when `divisor` is zero; no
    /// persistence is attempted in that case.
    async fn divide(&self, dividend: i32, divisor: i32) -> Result<Calculation, CalcError>;
}

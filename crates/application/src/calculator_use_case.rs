//! Calculator Use Case
//!
//! Pass-through implementation of the inbound port. It exists so the
//! adapters depend on `CalculatorPort` instead of the concrete domain
//! service, leaving room for orchestration or decoration later without
//! adapter changes.

use std::sync::Arc;

use async_trait::async_trait;
use calcd_core::{CalcError, Calculation};
use calcd_ports::CalculatorPort;

use crate::CalculatorService;

/// Use case implementing the inbound port atop the domain service
pub struct CalculatorUseCase {
    service: Arc<CalculatorService>,
}

impl CalculatorUseCase {
    pub fn new(service: Arc<CalculatorService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CalculatorPort for CalculatorUseCase {
    async fn add(&self, a: i32, b: i32) -> Result<Calculation, CalcError> {
        self.service.add(a, b).await
    }

    async fn divide(&self, dividend: i32, divisor: i32) -> Result<Calculation, CalcError> {
        self.service.divide(dividend, divisor).await
    }
}

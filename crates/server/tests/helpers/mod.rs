//! Shared test doubles for the transport adapter tests

use async_trait::async_trait;
use calcd_adapters::InMemoryCalculationRepository;
use calcd_application::{CalculatorService, CalculatorUseCase};
use calcd_core::Calculation;
use calcd_ports::{CalculationRepository, CalculatorPort, RepositoryError};
use std::sync::Arc;

/// Repository double whose writes always fail
pub struct FailingCalculationRepository;

#[async_trait]
impl CalculationRepository for FailingCalculationRepository {
    async fn save(&self, _calculation: &Calculation) -> Result<Calculation, RepositoryError> {
        Err(RepositoryError::Database(
            "connection reset by peer".to_string(),
        ))
    }
}

/// Inbound port backed by the in-memory repository
///
/// Returns the repository too so tests can assert on write counts.
pub fn port_with_memory_repo() -> (Arc<dyn CalculatorPort>, InMemoryCalculationRepository) {
    let repo = InMemoryCalculationRepository::new();
    let service = Arc::new(CalculatorService::new(Arc::new(repo.clone())));
    let usecase: Arc<dyn CalculatorPort> = Arc::new(CalculatorUseCase::new(service));
    (usecase, repo)
}

/// Inbound port whose persistence step always fails
pub fn port_with_failing_repo() -> Arc<dyn CalculatorPort> {
    let service = Arc::new(CalculatorService::new(Arc::new(
        FailingCalculationRepository,
    )));
    Arc::new(CalculatorUseCase::new(service))
}

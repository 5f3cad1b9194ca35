//! Calculator Domain Service
//!
//! Pure business logic: validates operands, computes the result and
//! coordinates persistence through the repository port. Stateless; one
//! instance is shared across all concurrent requests.

use std::sync::Arc;

use calcd_core::{CalcError, Calculation, Operation};
use calcd_ports::CalculationRepository;
use tracing::debug;

/// Calculator domain service
///
/// Integer semantics are explicit two's complement wraparound: `add`
/// wraps on overflow and `divide(i32::MIN, -1)` wraps to `i32::MIN`.
/// Division truncates toward zero.
pub struct CalculatorService {
    repo: Arc<dyn CalculationRepository>,
}

impl CalculatorService {
    pub fn new(repo: Arc<dyn CalculationRepository>) -> Self {
        Self { repo }
    }

    /// Add two integers and persist the outcome
    ///
    /// A successful return implies exactly one durable write; on
    /// repository failure the error is propagated unchanged and no
    /// record is returned.
    pub async fn add(&self, a: i32, b: i32) -> Result<Calculation, CalcError> {
        let result = a.wrapping_add(b);
        debug!(a, b, result, "computed add");

        let calculation = Calculation::new(Operation::Add, a, b, result);
        let persisted = self.repo.save(&calculation).await?;

        Ok(persisted)
    }

    /// Divide two integers and persist the outcome
    ///
    /// # Errors
    /// Returns `CalcError::InvalidInput` for a zero divisor before any
    /// repository call is made.
    pub async fn divide(&self, dividend: i32, divisor: i32) -> Result<Calculation, CalcError> {
        if divisor == 0 {
            return Err(CalcError::division_by_zero());
        }

        let result = dividend.wrapping_div(divisor);
        debug!(dividend, divisor, result, "computed divide");

        let calculation = Calculation::new(Operation::Divide, dividend, divisor, result);
        let persisted = self.repo.save(&calculation).await?;

        Ok(persisted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use calcd_ports::RepositoryError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counting repository fake that stamps records like the real store
    struct RecordingRepository {
        saves: AtomicUsize,
        fail: bool,
    }

    impl RecordingRepository {
        fn new() -> Self {
            Self {
                saves: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                saves: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CalculationRepository for RecordingRepository {
        async fn save(&self, calculation: &Calculation) -> Result<Calculation, RepositoryError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RepositoryError::Database("pool closed".to_string()));
            }
            let mut stamped = calculation.clone();
            stamped.id = Some(calcd_core::Uuid::new_v4());
            stamped.created_at = Some(calcd_core::Utc::now());
            Ok(stamped)
        }
    }

    fn service_with(repo: Arc<RecordingRepository>) -> CalculatorService {
        CalculatorService::new(repo)
    }

    #[tokio::test]
    async fn test_add_computes_sum_and_persists_once() {
        let repo = Arc::new(RecordingRepository::new());
        let service = service_with(repo.clone());

        let calc = service.add(2, 3).await.unwrap();

        assert_eq!(calc.result, 5);
        assert_eq!(calc.operation, Operation::Add);
        assert_eq!(calc.operand_a, 2);
        assert_eq!(calc.operand_b, 3);
        assert!(calc.is_persisted());
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn test_add_wraps_on_overflow() {
        let repo = Arc::new(RecordingRepository::new());
        let service = service_with(repo.clone());

        let calc = service.add(i32::MAX, 1).await.unwrap();
        assert_eq!(calc.result, i32::MIN);

        let calc = service.add(i32::MIN, -1).await.unwrap();
        assert_eq!(calc.result, i32::MAX);
        assert_eq!(repo.save_count(), 2);
    }

    #[tokio::test]
    async fn test_divide_truncates_toward_zero() {
        let repo = Arc::new(RecordingRepository::new());
        let service = service_with(repo.clone());

        assert_eq!(service.divide(10, 2).await.unwrap().result, 5);
        assert_eq!(service.divide(-7, 2).await.unwrap().result, -3);
        assert_eq!(service.divide(7, -2).await.unwrap().result, -3);
        assert_eq!(repo.save_count(), 3);
    }

    #[tokio::test]
    async fn test_divide_min_by_negative_one_wraps() {
        let repo = Arc::new(RecordingRepository::new());
        let service = service_with(repo.clone());

        let calc = service.divide(i32::MIN, -1).await.unwrap();
        assert_eq!(calc.result, i32::MIN);
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn test_divide_by_zero_fails_fast_without_persistence() {
        let repo = Arc::new(RecordingRepository::new());
        let service = service_with(repo.clone());

        let err = service.divide(10, 0).await.unwrap_err();

        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert_eq!(err.to_string(), "cannot divide by zero");
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_repository_failure_propagates_for_add() {
        let repo = Arc::new(RecordingRepository::failing());
        let service = service_with(repo.clone());

        let err = service.add(2, 3).await.unwrap_err();

        assert!(matches!(err, CalcError::Persistence(_)));
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn test_repository_failure_propagates_for_divide() {
        let repo = Arc::new(RecordingRepository::failing());
        let service = service_with(repo.clone());

        let err = service.divide(10, 2).await.unwrap_err();

        assert!(matches!(err, CalcError::Persistence(_)));
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn test_repeated_calls_each_persist_a_new_record() {
        // No deduplication: identical inputs still write a fresh row.
        let repo = Arc::new(RecordingRepository::new());
        let service = service_with(repo.clone());

        let first = service.add(1, 1).await.unwrap();
        let second = service.add(1, 1).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.save_count(), 2);
    }
}

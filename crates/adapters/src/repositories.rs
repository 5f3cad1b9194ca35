//! In-memory repository implementation
//!
//! Backs adapter tests and local development without a database.

use async_trait::async_trait;
use calcd_core::Calculation;
use calcd_ports::{CalculationRepository, RepositoryError};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory calculation repository
///
/// Stamps records the way the PostgreSQL adapter does, so adapter
/// tests observe the same persisted/unpersisted distinction.
#[derive(Debug, Clone)]
pub struct InMemoryCalculationRepository {
    calculations: Arc<RwLock<Vec<Calculation>>>,
}

impl InMemoryCalculationRepository {
    pub fn new() -> Self {
        Self {
            calculations: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of records stored so far
    pub async fn len(&self) -> usize {
        self.calculations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.calculations.read().await.is_empty()
    }

    /// Snapshot of the stored records, oldest first
    pub async fn all(&self) -> Vec<Calculation> {
        self.calculations.read().await.clone()
    }
}

impl Default for InMemoryCalculationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CalculationRepository for InMemoryCalculationRepository {
    async fn save(&self, calculation: &Calculation) -> Result<Calculation, RepositoryError> {
        let mut stamped = calculation.clone();
        stamped.id = Some(uuid::Uuid::new_v4());
        stamped.created_at = Some(chrono::Utc::now());

        let mut calculations = self.calculations.write().await;
        calculations.push(stamped.clone());

        Ok(stamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcd_core::Operation;

    #[tokio::test]
    async fn test_save_stamps_and_stores() {
        let repo = InMemoryCalculationRepository::new();
        assert!(repo.is_empty().await);

        let calc = Calculation::new(Operation::Add, 2, 3, 5);
        let stored = repo.save(&calc).await.unwrap();

        assert!(stored.is_persisted());
        assert!(stored.created_at.is_some());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_identical_saves_get_distinct_ids() {
        let repo = InMemoryCalculationRepository::new();
        let calc = Calculation::new(Operation::Divide, 10, 2, 5);

        let first = repo.save(&calc).await.unwrap();
        let second = repo.save(&calc).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len().await, 2);
    }
}

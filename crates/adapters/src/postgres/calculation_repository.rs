//! PostgreSQL Calculation Repository
//!
//! Production implementation of the calculation repository port. The
//! store assigns `id` and `created_at`; the write is a single INSERT,
//! so the all-or-nothing contract of the port holds without an
//! explicit transaction.

use async_trait::async_trait;
use calcd_core::Calculation;
use calcd_ports::{CalculationRepository, RepositoryError};
use sqlx::{PgPool, Row};
use tracing::{debug, info};

/// PostgreSQL Calculation Repository
///
/// Holds a shared connection pool acquired once at startup; safe for
/// concurrent use.
#[derive(Debug, Clone)]
pub struct PostgresCalculationRepository {
    pool: PgPool,
}

impl PostgresCalculationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Initialize database schema for calculations
    pub async fn init_schema(&self) -> Result<(), RepositoryError> {
        info!("Initializing calculations schema");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS calculations (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                operation TEXT NOT NULL,
                operand_a INTEGER NOT NULL,
                operand_b INTEGER NOT NULL,
                result INTEGER NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            RepositoryError::Database(format!("failed to create calculations table: {}", e))
        })?;

        info!("Calculations schema initialized");
        Ok(())
    }
}

#[async_trait]
impl CalculationRepository for PostgresCalculationRepository {
    async fn save(&self, calculation: &Calculation) -> Result<Calculation, RepositoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO calculations (operation, operand_a, operand_b, result)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at
        "#,
        )
        .bind(calculation.operation.as_str())
        .bind(calculation.operand_a)
        .bind(calculation.operand_b)
        .bind(calculation.result)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(format!("failed to save calculation: {}", e)))?;

        let mut stamped = calculation.clone();
        stamped.id = Some(row.get::<uuid::Uuid, _>("id"));
        stamped.created_at = Some(row.get::<chrono::DateTime<chrono::Utc>, _>("created_at"));

        debug!(
            id = %stamped.id.unwrap_or_default(),
            operation = %stamped.operation,
            "calculation persisted"
        );
        Ok(stamped)
    }
}

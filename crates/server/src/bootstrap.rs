//! Server Bootstrap - Explicit Composition Root
//!
//! Builds the dependency graph once at process start (config → pool →
//! repository → domain service → use case) and returns owned handles.
//! `shutdown_server` releases them in reverse order of acquisition.
//! There is no framework-managed registry.

use calcd_adapters::config::{AppConfig, ConfigError, LoggingConfig};
use calcd_adapters::PostgresCalculationRepository;
use calcd_application::{CalculatorService, CalculatorUseCase};
use calcd_ports::CalculatorPort;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("General error: {0}")]
    General(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Owned handles for everything built at startup
#[derive(Clone)]
pub struct ServerComponents {
    pub config: AppConfig,
    pub usecase: Arc<dyn CalculatorPort>,
    pub pool: PgPool,
}

/// Initialize the tracing subscriber
///
/// RUST_LOG wins over the configured level so operators can override
/// without touching config files.
pub fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the full dependency graph from loaded configuration
pub async fn initialize_server(config: AppConfig) -> Result<ServerComponents> {
    info!("🚀 Initializing calcd server");

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .map_err(|e| {
            error!("❌ Failed to connect to PostgreSQL: {}", e);
            BootstrapError::Database(format!("failed to connect to PostgreSQL: {}", e))
        })?;
    info!("✅ PostgreSQL connection pool initialized");

    let repository = Arc::new(PostgresCalculationRepository::new(pool.clone()));
    repository.init_schema().await.map_err(|e| {
        error!("❌ Failed to initialize calculations schema: {}", e);
        BootstrapError::Database(e.to_string())
    })?;
    info!("✅ Calculations schema initialized");

    let service = Arc::new(CalculatorService::new(repository));
    let usecase: Arc<dyn CalculatorPort> = Arc::new(CalculatorUseCase::new(service));
    info!("✅ Domain service and use case wired");

    Ok(ServerComponents {
        config,
        usecase,
        pool,
    })
}

/// Release owned resources in reverse order of acquisition
///
/// The use case and repository are dropped with the components value;
/// the pool, acquired first, is closed last.
pub async fn shutdown_server(components: ServerComponents) {
    info!("🧹 Releasing server resources");
    let ServerComponents { pool, .. } = components;
    pool.close().await;
    info!("✅ Database pool closed");
}

/// Log the effective configuration at startup, secrets excluded
pub fn log_config_summary(config: &AppConfig) {
    info!(
        host = %config.server.host,
        http_port = config.server.http_port,
        grpc_port = config.server.grpc_port,
        db_max_connections = config.database.max_connections,
        log_level = %config.logging.level,
        "configuration loaded"
    );
}

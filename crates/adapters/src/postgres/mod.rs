//! PostgreSQL adapter implementations

pub mod calculation_repository;

pub use calculation_repository::PostgresCalculationRepository;

//! Application Layer
//!
//! Holds the calculator domain service and the use case that exposes
//! it through the inbound port.

pub mod calculator_service;
pub mod calculator_use_case;

pub use calculator_service::CalculatorService;
pub use calculator_use_case::CalculatorUseCase;

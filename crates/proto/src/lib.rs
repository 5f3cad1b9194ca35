//! Calcd Protobuf Definitions
//!
//! This crate contains the Protocol Buffer definitions for the binary
//! RPC surface of the calculation service.

pub mod pb {
    tonic::include_proto!("calculator");
}

pub use pb::{AddRequest, CalculationResponse, DivideRequest};

pub use pb::calculator_service_client::CalculatorServiceClient;
pub use pb::calculator_service_server::{CalculatorService, CalculatorServiceServer};

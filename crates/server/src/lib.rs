//! Calcd Server
//!
//! Binds the calculator inbound port to its two transports: a tonic
//! gRPC service and an axum JSON API. Also hosts the composition root
//! that wires configuration, persistence, domain service and use case
//! together at process start.

pub mod api_docs;
pub mod api_router;
pub mod bootstrap;
pub mod calculator_api;
pub mod dtos;
pub mod error;
pub mod grpc;

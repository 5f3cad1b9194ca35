//! Centralized API Router
//!
//! Single point of entry for all HTTP routes, used by the binary and
//! by the integration tests.

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api_docs::openapi_handler;
use crate::bootstrap::ServerComponents;
use crate::calculator_api::{CalculatorApiState, calculator_api_routes};

/// Build the complete HTTP router from the composed components
pub fn create_api_router(components: &ServerComponents) -> Router {
    router_for_port(components.usecase.clone())
}

/// Build the router directly from an inbound port
///
/// Integration tests use this to mount the API over a test double
/// without a database pool behind it.
pub fn router_for_port(usecase: std::sync::Arc<dyn calcd_ports::CalculatorPort>) -> Router {
    let state = CalculatorApiState::new(usecase);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(calculator_api_routes(state))
        .route("/health", get(health_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Liveness probe
async fn health_handler() -> &'static str {
    "OK"
}

//! API Documentation using OpenAPI 3.0 with utoipa
//!
//! The generated document is served at /api-docs/openapi.json.

use axum::response::Json;
use utoipa::OpenApi;

use crate::dtos::{CalcRequestDto, CalcResponseDto, ErrorResponseDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::calculator_api::add_handler,
        crate::calculator_api::divide_handler,
    ),
    components(schemas(CalcRequestDto, CalcResponseDto, ErrorResponseDto)),
    tags(
        (name = "calculator", description = "Arithmetic operations recorded on every success")
    ),
    info(
        title = "calcd API",
        description = "Calculation service: add and divide over JSON, with every successful calculation persisted",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

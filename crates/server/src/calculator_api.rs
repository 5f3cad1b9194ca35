//! Calculator REST API Module
//!
//! Binds the calculator inbound port to `POST /add` and
//! `POST /divide`. Decode failures never reach the port; domain
//! errors are translated in `error.rs`.

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::post,
};
use calcd_ports::CalculatorPort;
use std::sync::Arc;
use tracing::{info, warn};

use crate::dtos::{CalcRequestDto, CalcResponseDto, ErrorResponseDto};
use crate::error::ApiError;

// ===== Application State =====

/// Application state for the calculator API
#[derive(Clone)]
pub struct CalculatorApiState {
    pub usecase: Arc<dyn CalculatorPort>,
}

impl CalculatorApiState {
    pub fn new(usecase: Arc<dyn CalculatorPort>) -> Self {
        Self { usecase }
    }
}

// ===== API Handlers =====

#[utoipa::path(
    post,
    path = "/add",
    request_body = CalcRequestDto,
    responses(
        (status = 200, description = "Sum computed and recorded", body = CalcResponseDto),
        (status = 400, description = "Malformed request body", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
    tag = "calculator"
)]
pub async fn add_handler(
    State(state): State<CalculatorApiState>,
    payload: Result<Json<CalcRequestDto>, JsonRejection>,
) -> Result<Json<CalcResponseDto>, ApiError> {
    let Json(request) = payload.map_err(reject_body)?;

    info!(a = request.a, b = request.b, "handling REST add request");
    let calculation = state.usecase.add(request.a, request.b).await?;

    Ok(Json(CalcResponseDto {
        result: calculation.result,
    }))
}

#[utoipa::path(
    post,
    path = "/divide",
    request_body = CalcRequestDto,
    responses(
        (status = 200, description = "Quotient computed and recorded", body = CalcResponseDto),
        (status = 400, description = "Malformed body or zero divisor", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
    tag = "calculator"
)]
pub async fn divide_handler(
    State(state): State<CalculatorApiState>,
    payload: Result<Json<CalcRequestDto>, JsonRejection>,
) -> Result<Json<CalcResponseDto>, ApiError> {
    let Json(request) = payload.map_err(reject_body)?;

    info!(
        dividend = request.a,
        divisor = request.b,
        "handling REST divide request"
    );
    let calculation = state.usecase.divide(request.a, request.b).await?;

    Ok(Json(CalcResponseDto {
        result: calculation.result,
    }))
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    warn!(details = %rejection, "failed to decode request body");
    ApiError::BadRequest("invalid request body".to_string())
}

/// Routes for the calculator API
pub fn calculator_api_routes(state: CalculatorApiState) -> Router {
    Router::new()
        .route("/add", post(add_handler))
        .route("/divide", post(divide_handler))
        .with_state(state)
}

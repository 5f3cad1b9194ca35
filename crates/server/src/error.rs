//! Error translation for both transports
//!
//! The domain surfaces two error classes and each adapter maps them
//! independently: `InvalidInput` keeps its original message on the
//! wire (400 / InvalidArgument), `Persistence` is logged in full
//! server-side and replaced with a generic message (500 / Internal).
//! The two classes are never conflated, for divide included.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use calcd_core::CalcError;
use serde_json::json;
use tonic::Status;
use tracing::{error, warn};

/// Generic message used wherever internal detail must not leak
pub const INTERNAL_ERROR_MESSAGE: &str = "an unexpected error occurred";

/// Map a domain error to a gRPC status
pub fn status_from_calc_error(err: &CalcError) -> Status {
    match err {
        CalcError::InvalidInput(msg) => {
            warn!(details = %msg, "rejecting gRPC request with invalid argument");
            Status::invalid_argument(msg.clone())
        }
        CalcError::Persistence(msg) => {
            error!(details = %msg, "persistence failure behind gRPC request");
            Status::internal(INTERNAL_ERROR_MESSAGE)
        }
    }
}

/// HTTP-side error with a JSON body
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("an unexpected error occurred")]
    Internal,
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::InvalidInput(msg) => {
                warn!(details = %msg, "rejecting HTTP request with client error");
                ApiError::BadRequest(msg)
            }
            CalcError::Persistence(msg) => {
                error!(details = %msg, "persistence failure behind HTTP request");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

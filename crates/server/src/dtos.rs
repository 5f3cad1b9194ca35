//! REST API data transfer objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body shared by `/add` and `/divide`
///
/// For divide, `a` is the dividend and `b` the divisor.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CalcRequestDto {
    pub a: i32,
    pub b: i32,
}

/// Successful calculation response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalcResponseDto {
    pub result: i32,
}

/// Error body returned for 4xx/5xx responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponseDto {
    pub error: String,
}

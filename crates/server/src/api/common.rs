// Common DTOs for public API
//
// These types are shared across multiple API endpoints.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Convert to axum response tuple
    pub fn into_response(self, status: StatusCode) -> (StatusCode, Json<Self>) {
        (status, Json(self))
    }
}

/// Response wrapper for list endpoints.
/// All list endpoints return responses wrapped in a `data` field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    /// Array of items returned by the list operation.
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// Shorthand for handler errors that carry a JSON body
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Log a storage failure and turn it into a 500
pub fn internal_error(action: &str, err: anyhow::Error) -> ApiError {
    tracing::error!("Failed to {}: {}", action, err);
    ErrorResponse::new("Internal server error").into_response(StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn not_found(what: &str) -> ApiError {
    ErrorResponse::new(format!("{} not found", what)).into_response(StatusCode::NOT_FOUND)
}

//! Error types for iotv-sut

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400), nothing was persisted
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// No configuration stored yet (404)
    #[error("No data available")]
    NoData,

    /// iotv-common error (500)
    #[error("Common error: {0}")]
    Common(#[from] iotv_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::NoData => (
                StatusCode::NOT_FOUND,
                json!({ "status": "No data available" }),
            ),
            ApiError::Common(ref err) => {
                tracing::error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": err.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

//! # Web API Error Types
//!
//! Outward-facing error taxonomy and its HTTP conversions. Leverages
//! thiserror for structured error handling and Axum's IntoResponse for HTTP
//! conversion. Internal diagnostic detail stays on the tracing channel; the
//! wire carries stable category names and human-readable messages only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::TasksumError;

/// Web API specific errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found")]
    NotFound,

    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("External service failed: {message}")]
    ExternalService { message: String },

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Create a BadRequest error with a custom message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", "Task not found"),

            ApiError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message.as_str())
            }

            ApiError::ExternalService { message } => (
                StatusCode::BAD_GATEWAY,
                "EXTERNAL_SERVICE_ERROR",
                message.as_str(),
            ),

            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error",
            ),
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message
            }
        });

        (status_code, Json(error_response)).into_response()
    }
}

/// Convert engine errors to API errors.
///
/// Store and configuration failures collapse into the generic internal
/// category; the detail is logged here and never crosses the boundary.
impl From<TasksumError> for ApiError {
    fn from(err: TasksumError) -> Self {
        match err {
            TasksumError::ValidationError(message) => ApiError::BadRequest { message },
            TasksumError::TaskNotFound { .. } => ApiError::NotFound,
            TasksumError::ExternalServiceError(message) => ApiError::ExternalService { message },
            TasksumError::DatabaseError(detail) | TasksumError::ConfigurationError(detail) => {
                error!(detail = %detail, "Internal failure surfaced to web layer");
                ApiError::Internal
            }
        }
    }
}

/// Result type alias for web API operations
pub type ApiResult<T> = Result<T, ApiError>;

//! HTTP error mapping: typed handler errors to status codes and JSON bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::core::ClassifyError;

/// Error response body sent for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short machine-readable error name
    pub error: String,
    /// Human-readable message
    pub message: String,
}

/// Handler-level error type. Validation failures map to 400; anything
/// unexpected collapses into a single 500 with a generic body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    MissingInput,
    InvalidFormat,
    Internal(String),
}

impl From<ClassifyError> for AppError {
    fn from(err: ClassifyError) -> Self {
        match err {
            ClassifyError::MissingInput => AppError::MissingInput,
            ClassifyError::InvalidFormat => AppError::InvalidFormat,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::MissingInput => (
                StatusCode::BAD_REQUEST,
                "Missing numbers parameter",
                "Please provide numbers as comma-separated values in the query parameter"
                    .to_string(),
            ),
            AppError::InvalidFormat => (
                StatusCode::BAD_REQUEST,
                "Invalid number format",
                "Please ensure all values are valid numbers".to_string(),
            ),
            AppError::Internal(detail) => {
                tracing::error!("Internal server error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    detail,
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

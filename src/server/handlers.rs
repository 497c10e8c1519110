//! HTTP handlers for the number counting API.
//!
//! Each handler delegates to the pure classifier in [`crate::core`]; the
//! handlers themselves only parse the query and shape the response.

use axum::{extract::Query, Json};
use serde_json::json;

use super::dto::{CountNumbersQuery, CountNumbersResponse, HealthResponse};
use super::error::AppError;
use crate::core;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /count-numbers
///
/// Count positive, negative, and zero numbers in a comma-separated list.
///
/// Example: `GET /count-numbers?numbers=1,2,-3,0,5,-1,0`
pub async fn count_numbers(
    Query(query): Query<CountNumbersQuery>,
) -> HandlerResult<CountNumbersResponse> {
    let raw = query.numbers.unwrap_or_default();
    let classification = core::classify_numbers(&raw)?;

    tracing::debug!(
        total = classification.counts.total,
        "classified input list"
    );

    Ok(Json(CountNumbersResponse {
        input_numbers: classification.numbers,
        counts: classification.counts,
        status: "success".to_string(),
    }))
}

/// GET /health
///
/// Liveness probe; always healthy while the process is up.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Number counting API is running".to_string(),
    })
}

/// GET /
///
/// Endpoint listing for humans poking at the API root.
pub async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Number Counting API",
        "endpoints": {
            "count-numbers": {
                "method": "GET",
                "description": "Count positive, negative, and zero numbers",
                "parameters": {
                    "numbers": "Comma-separated list of numbers"
                },
                "example": "/count-numbers?numbers=1,2,-3,0,5,-1,0"
            },
            "health": {
                "method": "GET",
                "description": "Health check endpoint"
            }
        }
    }))
}

//! Wire DTOs for the number counting API.

use serde::{Deserialize, Serialize};

use crate::core::Counts;

/// Query parameters for `GET /count-numbers`.
#[derive(Debug, Clone, Deserialize)]
pub struct CountNumbersQuery {
    /// Comma-separated list of numbers; absence is a validation error.
    pub numbers: Option<String>,
}

/// Success response for `GET /count-numbers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountNumbersResponse {
    /// The parsed input list, echoed back for display.
    pub input_numbers: Vec<f64>,
    pub counts: Counts,
    pub status: String,
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Transport-layer failures between client and service. Never retried
/// automatically; each surfaces its own message for the presenter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection error: cannot connect to the API. Make sure the server is running.")]
    ConnectionRefused,

    #[error("Timeout error: the API request timed out.")]
    Timeout,

    #[error("Invalid response from the API.")]
    MalformedResponse,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Counts block as the client reads it off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountSummary {
    pub positive: u64,
    pub negative: u64,
    pub zero: u64,
    pub total: u64,
}

/// Success payload of `GET /count-numbers`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountResponse {
    pub input_numbers: Vec<f64>,
    pub counts: CountSummary,
    pub status: String,
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    error: String,
    message: String,
}

/// HTTP client for the number counting API.
///
/// Defines its own wire structs rather than borrowing the server's DTOs, so
/// it keeps working (or fails loudly) under version skew.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// `GET {base}/count-numbers?numbers=<raw>`.
    pub async fn count_numbers(&self, raw: &str) -> Result<CountResponse, TransportError> {
        let url = format!("{}/count-numbers", self.base_url);
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("numbers", raw)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        match status {
            StatusCode::OK => response
                .json::<CountResponse>()
                .await
                .map_err(|_| TransportError::MalformedResponse),
            StatusCode::BAD_REQUEST | StatusCode::INTERNAL_SERVER_ERROR => {
                let body: ErrorBody = response
                    .json()
                    .await
                    .map_err(|_| TransportError::MalformedResponse)?;
                Err(TransportError::Api {
                    status: status.as_u16(),
                    message: body.message,
                })
            }
            // Anything else is outside the contract.
            _ => Err(TransportError::MalformedResponse),
        }
    }

    /// `GET {base}/health`.
    pub async fn health(&self) -> Result<HealthReport, TransportError> {
        let url = format!("{}/health", self.base_url);
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(map_send_error)?;

        if response.status() != StatusCode::OK {
            return Err(TransportError::MalformedResponse);
        }

        response
            .json::<HealthReport>()
            .await
            .map_err(|_| TransportError::MalformedResponse)
    }
}

fn map_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::ConnectionRefused
    } else {
        TransportError::MalformedResponse
    }
}

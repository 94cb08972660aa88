//! Error type system for the gateway
//!
//! This module provides the gateway's error taxonomy with:
//! - HTTP status code mapping
//! - Conversion to the JSON error body returned by every handler
//! - Server-side logging of error details that never reach the caller

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main error type for the gateway
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    // System-level errors
    #[error("Initialization failed: {0}")]
    InitializationError(String),

    // Request validation errors
    #[error("Invalid request: {0}")]
    ValidationError(String),

    // Configuration errors
    #[error("openFDA API key is not configured")]
    MissingApiKey,

    // Upstream errors
    #[error("Upstream request failed: {0}")]
    UpstreamError(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("Failed to parse upstream document: {0}")]
    ParseError(String),

    // Local store errors
    #[error("Store error: {0}")]
    StoreError(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Blocking task failed: {0}")]
    TaskError(String),

    // I/O errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GatewayError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            GatewayError::ValidationError(_) => StatusCode::BAD_REQUEST,

            // 500 Internal Server Error
            GatewayError::InitializationError(_)
            | GatewayError::MissingApiKey
            | GatewayError::UpstreamError(_)
            | GatewayError::UpstreamStatus(_)
            | GatewayError::ParseError(_)
            | GatewayError::StoreError(_)
            | GatewayError::PoolError(_)
            | GatewayError::TaskError(_)
            | GatewayError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type name for server-side logging
    pub fn error_type(&self) -> &'static str {
        match self {
            GatewayError::InitializationError(_) => "InitializationError",
            GatewayError::ValidationError(_) => "ValidationError",
            GatewayError::MissingApiKey => "ConfigurationError",
            GatewayError::UpstreamError(_) => "UpstreamError",
            GatewayError::UpstreamStatus(_) => "UpstreamError",
            GatewayError::ParseError(_) => "ParseError",
            GatewayError::StoreError(_) => "StoreError",
            GatewayError::PoolError(_) => "StoreError",
            GatewayError::TaskError(_) => "StoreError",
            GatewayError::IoError(_) => "IoError",
        }
    }

    /// The message exposed to the caller.
    ///
    /// Validation messages describe the missing input; everything else is
    /// deliberately generic so driver and upstream errors never leak. The
    /// detailed error is logged by `into_response`.
    pub fn public_message(&self) -> String {
        match self {
            GatewayError::ValidationError(message) => message.clone(),
            GatewayError::MissingApiKey => "API key is missing".to_string(),
            GatewayError::UpstreamError(_)
            | GatewayError::UpstreamStatus(_)
            | GatewayError::ParseError(_) => {
                "Failed to fetch data from the upstream service".to_string()
            }
            GatewayError::StoreError(_)
            | GatewayError::PoolError(_)
            | GatewayError::TaskError(_) => "Failed to query the local store".to_string(),
            GatewayError::InitializationError(_) | GatewayError::IoError(_) => {
                "An internal error occurred".to_string()
            }
        }
    }
}

/// Error body returned by every failed request: `{"error": <message>}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Implement IntoResponse so handlers can bubble errors with `?`
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        // Full detail stays server-side
        tracing::error!(
            error_type = self.error_type(),
            status_code = %status_code,
            "Request failed: {}",
            self
        );

        let body = ErrorResponse::new(self.public_message());
        (status_code, Json(body)).into_response()
    }
}

/// Result type alias for operations that can fail with GatewayError
pub type Result<T> = std::result::Result<T, GatewayError>;

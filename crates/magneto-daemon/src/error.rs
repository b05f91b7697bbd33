//! Error types for magneto-daemon

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use magneto_genome::InvalidGrid;
use magneto_stats::StorageError;
use serde::Serialize;
use thiserror::Error;

/// Daemon-level errors
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// API-specific errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request body
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// DNA grid failed validation
    #[error("Invalid DNA: {0}")]
    InvalidDna(#[from] InvalidGrid),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", None),
            ApiError::InvalidDna(reason) => (
                StatusCode::BAD_REQUEST,
                "INVALID_DNA",
                Some(serde_json::json!({ "kind": reason.kind() })),
            ),
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "counter storage failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::BadRequest("test".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );

        assert_eq!(
            ApiError::InvalidDna(InvalidGrid::Empty)
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );

        assert_eq!(
            ApiError::Storage(StorageError::Backend("down".to_string()))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_dna_message() {
        let err = ApiError::from(InvalidGrid::Missing);
        assert_eq!(err.to_string(), "Invalid DNA: dna cannot be null");
    }
}

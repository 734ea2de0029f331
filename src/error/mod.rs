//! Centralized API error handling
//!
//! This module provides a unified error type for API responses with proper
//! HTTP status code mapping and JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error type with HTTP status code mapping
///
/// Validation and format failures carry the exact client-facing message,
/// so their `Display` is the bare payload.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Required request field missing or mistyped
    #[error("{0}")]
    Validation(String),

    /// Date string not in ISO `YYYY-MM-DD` form
    #[error("{0}")]
    Format(String),

    /// Referenced record does not exist
    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// JSON error response body
///
/// The resource surface contract is a flat `{"error": "<message>"}` object.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    /// Get the error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Format(_) => "FORMAT_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Format(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        // Log server errors
        match &self {
            ApiError::Internal(_) => {
                tracing::error!(error = %message, code = %error_code, "Server error occurred");
            }
            _ => {
                tracing::debug!(error = %message, code = %error_code, "Client error occurred");
            }
        }

        let body = ErrorResponse { error: message };

        (status, Json(body)).into_response()
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ApiError::Validation("test".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            ApiError::Format("test".to_string()).error_code(),
            "FORMAT_ERROR"
        );
        assert_eq!(
            ApiError::NotFound("test".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Format("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("test".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_messages_are_bare() {
        // These messages go to clients verbatim in the `error` field
        assert_eq!(
            ApiError::Validation("Invalid input data".to_string()).to_string(),
            "Invalid input data"
        );
        assert_eq!(
            ApiError::NotFound("Loan not found".to_string()).to_string(),
            "Loan not found"
        );
    }
}

//! Error Types
//!
//! Error types for each layer with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while talking to the instance metadata endpoint
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Metadata request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Metadata endpoint returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Metadata document could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Instance metadata is incomplete: {0}")]
    IncompleteMetadata(String),

    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    ///
    /// Every failure here is the upstream's fault, so all map to 502.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::IncompleteMetadata(_) | Self::Metadata(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::IncompleteMetadata(_) => "METADATA_INCOMPLETE",
            Self::Metadata(MetadataError::Request(_)) => "METADATA_UNAVAILABLE",
            Self::Metadata(MetadataError::UnexpectedStatus(_)) => "METADATA_UPSTREAM_ERROR",
            Self::Metadata(MetadataError::Decode(_)) => "METADATA_INVALID",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{source}")]
    UseCase {
        #[source]
        source: UseCaseError,
        request_id: Option<String>,
    },
}

impl From<UseCaseError> for ApiError {
    fn from(source: UseCaseError) -> Self {
        ApiError::UseCase {
            source,
            request_id: None,
        }
    }
}

impl ApiError {
    /// Attach the request ID echoed in the error body
    #[must_use]
    pub fn with_request_id(self, id: Option<String>) -> Self {
        match self {
            ApiError::UseCase { source, .. } => ApiError::UseCase { source, request_id: id },
        }
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, request_id) = match self {
            ApiError::UseCase { source, request_id } => {
                tracing::error!(error = %source, code = source.error_code(), "Request failed");
                (source.status_code(), source.error_code().to_string(), source.to_string(), request_id)
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message },
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

/*
[INPUT]:  Error sources (HTTP, API error bodies, serialization, configuration)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Extras;

wire_enum! {
    /// The `type` field of an Increase error body.
    pub enum ErrorType {
        ApiMethodNotFound = "api_method_not_found_error",
        EnvironmentMismatch = "environment_mismatch_error",
        IdempotencyKeyAlreadyUsed = "idempotency_key_already_used_error",
        InsufficientPermissions = "insufficient_permissions_error",
        InternalServer = "internal_server_error",
        InvalidApiKey = "invalid_api_key_error",
        InvalidOperation = "invalid_operation_error",
        InvalidParameters = "invalid_parameters_error",
        MalformedRequest = "malformed_request_error",
        ObjectNotFound = "object_not_found_error",
        PrivateFeature = "private_feature_error",
        RateLimited = "rate_limited_error",
    }
}

/// Error body returned by the Increase API on non-2xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub title: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(flatten)]
    pub extra: Extras,
}

/// Main error type for the Increase client
#[derive(Error, Debug)]
pub enum IncreaseError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error(
        "API error ({status} {}): {title}",
        .kind.as_ref().map_or("unparsed_error_body", ErrorType::as_str)
    )]
    Api {
        status: u16,
        /// `None` when the body was not an Increase error object
        kind: Option<ErrorType>,
        title: String,
        detail: Option<String>,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl IncreaseError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            IncreaseError::Http(err) => err.is_timeout() || err.is_connect(),
            IncreaseError::RateLimit { .. } => true,
            IncreaseError::Api { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }

    /// Get retry delay in seconds (if the server asked for one)
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            IncreaseError::RateLimit { retry_after } => Some(*retry_after),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            IncreaseError::Api { status, kind, .. } => {
                matches!(*status, 401 | 403)
                    || matches!(
                        kind,
                        Some(
                            ErrorType::InvalidApiKey
                                | ErrorType::InsufficientPermissions
                                | ErrorType::EnvironmentMismatch
                        )
                    )
            }
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            IncreaseError::Api { status: 404, .. }
                | IncreaseError::Api {
                    kind: Some(ErrorType::ObjectNotFound),
                    ..
                }
        )
    }

    /// Build an API error from a status code and raw response body.
    ///
    /// Bodies that are not Increase error objects keep the raw text as title.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => IncreaseError::Api {
                status: status.as_u16(),
                kind: Some(parsed.kind),
                title: parsed.title,
                detail: parsed.detail,
            },
            Err(_) => IncreaseError::Api {
                status: status.as_u16(),
                kind: None,
                title: if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("unknown").to_string()
                } else {
                    body.trim().to_string()
                },
                detail: None,
            },
        }
    }
}

pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 409 | 429) || status >= 500
}

/// Result type alias for Increase operations
pub type Result<T> = std::result::Result<T, IncreaseError>;

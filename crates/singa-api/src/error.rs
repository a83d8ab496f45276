//! # API Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / non-2xx response / bad JSON                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (this module) ← Adds URL, status and body                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  anyhow (CLI) ← printed on stderr, exit code 1                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use singa_core::ValidationError;

/// Remote API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{url} returned {status}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// A lookup by SO number or id found nothing.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The response body was not the expected JSON shape.
    #[error("Unexpected response from {url}: {message}")]
    Decode { url: String, message: String },

    /// Request input failed validation before anything was sent.
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// True for `NotFound` and for a 404 status.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound { .. } | ApiError::Status { status: 404, .. }
        )
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/**
 * API Error Types
 *
 * This module defines the error type shared by all HTTP handlers. Each
 * variant corresponds to one class in the service's error taxonomy and
 * carries the message shown to the caller, except `Internal`, whose detail
 * is logged and never exposed.
 *
 * # Status Mapping
 *
 * `Conflict` and `NotFound` both answer 400 on the wire. That matches the
 * service's original HTTP contract (duplicate email and unknown email are
 * both 400-class), while the taxonomy keeps the classes distinct for
 * callers of the Rust API and for tests.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Unified error type for all API handlers
///
/// # Usage
///
/// ```rust
/// use eventbook::error::ApiError;
///
/// let err = ApiError::invalid_argument("All fields required");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is missing or empty
    #[error("{message}")]
    InvalidArgument {
        /// Human-readable error message
        message: String,
    },

    /// The request conflicts with existing state (duplicate email)
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// The referenced record does not exist (unknown email at signin)
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The caller is not authenticated, or presented bad credentials
    #[error("{message}")]
    Unauthenticated {
        /// Human-readable error message
        message: String,
    },

    /// An unexpected store or primitive failure
    ///
    /// The detail is logged when the response is produced; the caller only
    /// ever sees an opaque message.
    #[error("Internal server error")]
    Internal {
        /// Underlying cause, for logs only
        detail: String,
    },
}

impl ApiError {
    /// Create an `InvalidArgument` error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a `Conflict` error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a `NotFound` error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an `Unauthenticated` error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create an `Internal` error from an underlying cause
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            // 400 on the wire, see module docs
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to the caller
    ///
    /// For `Internal` this is always the opaque message, never the detail.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/**
 * Backend Error Types
 *
 * This enum represents all failures a handler can produce. Each variant
 * maps to an HTTP status code; the message is what lands in the response
 * body's `error` field.
 *
 * # Status Code Mapping
 *
 * - `Unauthorized` - 401 (missing/invalid credentials)
 * - `Validation` - 400 (malformed or rejected input)
 * - `NotFound` - 404 (no such record for this owner)
 * - `Unavailable` - 503 (datastore not configured)
 * - `Database` / `Token` / `Hash` / `Serialization` - 500
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or invalid credentials
    #[error("{message}")]
    Unauthorized { message: String },

    /// Malformed or rejected input
    #[error("{message}")]
    Validation { message: String },

    /// No such record visible to the requesting owner
    #[error("{message}")]
    NotFound { message: String },

    /// The datastore is not configured; the server is running degraded
    #[error("Database not configured")]
    Unavailable,

    /// Database query failure
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Token signing failure
    #[error("Failed to create token")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("Password processing failed")]
    Hash(#[from] bcrypt::BcryptError),

    /// Serialization error
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}

impl BackendError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// The HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Token(_) | Self::Hash(_) | Self::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message placed in the response body. Internal failure details
    /// stay in the logs, not on the wire.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

//! Unified error handling
//!
//! Every handler returns [`AppResult`]; [`AppError`] maps onto the three
//! HTTP outcomes the API exposes:
//!
//! | Variant | Status |
//! |---------|--------|
//! | Validation | 400 |
//! | NotFound | 404 |
//! | Database, Internal | 500 |
//!
//! Validation failures surface their message to the caller. Store and
//! internal failures are logged and collapsed into a generic body so no
//! internal detail leaks out.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input, bad id format, invalid enum value (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No matching document (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Persistence / connectivity failure (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else that went wrong server-side (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

// ========== Helper constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(format!("{} not found", resource.into()))
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;

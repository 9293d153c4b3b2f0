//! Error types for the CRM backend
//!
//! Provides unified error handling using thiserror. Validation
//! failures on mutation endpoints never pass through here; they are
//! answered in-band with `ok: false`. This type covers the failures
//! the caller cannot fix, which all map to a 500 with an
//! `{error, details}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Error Enum ==
/// Unified error type for the CRM backend.
#[derive(Error, Debug)]
pub enum Error {
    /// The property store failed to load or persist records
    #[error("property store error: {0}")]
    Store(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            Error::Store(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while fetching properties",
                msg.clone(),
            ),
            Error::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                msg.clone(),
            ),
        };

        error!(%details, "request failed: {message}");

        let body = Json(json!({
            "error": message,
            "details": details,
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the CRM backend.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the HTTP API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that renders
//! as the `{"success": false, "error": ...}` envelope. Failures are not
//! distinguished by HTTP status: every envelope goes out as 200.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cointoss_core::GameError;
use tracing::warn;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body was missing, not JSON, or did not match the schema.
    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),

    /// The player id in the path could not be decoded.
    #[error("{0}")]
    InvalidPath(#[from] PathRejection),

    /// The game refused the request.
    #[error("{0}")]
    Game(#[from] GameError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::InvalidBody(rejection) => rejection.body_text(),
            Self::InvalidPath(rejection) => rejection.body_text(),
            Self::Game(e) => e.to_string(),
        };

        warn!(error = %message, "request failed");

        let body = serde_json::json!({
            "success": false,
            "error": message,
        });

        (StatusCode::OK, axum::Json(body)).into_response()
    }
}

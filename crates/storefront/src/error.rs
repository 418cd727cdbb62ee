//! Request-boundary error handling.
//!
//! Expected domain failures (unknown product, unknown line item, bad
//! credentials, malformed quantity) are handled inline by the route
//! handlers, which redirect back to a sensible view with the state
//! unchanged. `AppError` covers what remains: infrastructure failures
//! that have no user-facing recovery, currently only session storage.
//! Those answer 500 without crashing the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or writing session state failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request error");

        // Don't expose internal error details to clients
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn session_error() -> tower_sessions::session::Error {
        let json_error = serde_json::from_str::<i32>("not a number").unwrap_err();
        tower_sessions::session::Error::SerdeJson(json_error)
    }

    #[test]
    fn test_session_error_display() {
        let err = AppError::from(session_error());
        assert!(err.to_string().starts_with("session error"));
    }

    #[test]
    fn test_session_error_maps_to_500() {
        let response = AppError::from(session_error()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! HTTP transport error handling
//!
//! Converts internal errors to JSON error responses with appropriate
//! HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::session::SessionError;
use crate::error::FetchError;
use crate::session::EMPTY_TICKER_MESSAGE;

pub const SESSION_LIMIT_MESSAGE: &str = "Too many active sessions, please try again later.";

/// HTTP transport errors
#[derive(Debug, thiserror::Error)]
pub enum HttpTransportError {
    #[error("Empty ticker")]
    EmptyTicker,

    #[error("Provider error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl HttpTransportError {
    /// Get HTTP status code for error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpTransportError::EmptyTicker => StatusCode::BAD_REQUEST,
            HttpTransportError::Fetch(_) => StatusCode::BAD_GATEWAY,
            HttpTransportError::Session(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message placed in the response body
    pub fn user_message(&self) -> &'static str {
        match self {
            HttpTransportError::EmptyTicker => EMPTY_TICKER_MESSAGE,
            HttpTransportError::Fetch(err) => err.user_message(),
            HttpTransportError::Session(_) => SESSION_LIMIT_MESSAGE,
        }
    }
}

impl IntoResponse for HttpTransportError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "error": self.user_message() });

        (status, Json(body)).into_response()
    }
}

/// Result type for HTTP transport operations
pub type Result<T> = std::result::Result<T, HttpTransportError>;

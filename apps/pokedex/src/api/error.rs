//! # API Errors
//!
//! Maps core errors onto HTTP responses.
//!
//! - Caller faults (bad sort column, page bounds, missing parameter) → 400
//! - Everything else → 500
//!
//! The body is always `{"error": "<message>"}`.

use super::types::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pokedex_core::PokedexError;

/// Error returned by API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by the catalog core.
    Core(PokedexError),
    /// A required request parameter is absent.
    MissingParameter(&'static str),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Core(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message placed in the response body.
    pub fn message(&self) -> String {
        match self {
            Self::Core(e) => e.to_string(),
            Self::MissingParameter(name) => format!("Missing required parameter: {}", name),
        }
    }
}

impl From<PokedexError> for ApiError {
    fn from(e: PokedexError) -> Self {
        Self::Core(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.message());
        } else {
            tracing::debug!("Rejected request: {}", self.message());
        }
        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! API error types mapped to HTTP status codes.
//!
//! Each [`ApiError`] variant maps to a specific HTTP status code and produces
//! a JSON response body `{"error": "message"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use forkcast_data::UpstreamError;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Request-time failure.
///
/// - `BadRequest` → 400
/// - `Upstream` → 502
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request parameters (400).
    #[error("{0}")]
    BadRequest(String),
    /// An upstream service failed or returned unusable data (502).
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Upstream(err) = &self {
            warn!(error = %err, "upstream failure");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

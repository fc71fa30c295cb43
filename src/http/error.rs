//! Relay error taxonomy and response mapping.
//!
//! # Design Decisions
//! - Missing request context and bad uploads are caller errors (400/403) and
//!   are rejected before any downstream call is made
//! - Transport failures reaching the downstream are surfaced as 500 with the
//!   underlying error message; never retried
//! - Downstream non-success statuses are NOT errors here; handlers relay
//!   them to the caller deliberately

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors that terminate a relay request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Required per-request context headers are absent or empty.
    #[error("X-Target-Url and Authorization headers are required")]
    MissingContext,

    /// Attachment upload carried no `file` field.
    #[error("no file field in request")]
    MissingFile,

    /// Attachment upload carried a `file` field without a filename.
    #[error("no file selected")]
    EmptyFilename,

    /// The inbound multipart body could not be read.
    #[error("invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    /// The requested target is not in the configured allow-list.
    #[error("target '{0}' is not allowed")]
    TargetNotAllowed(String),

    /// Network/transport failure talking to the downstream service.
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

impl RelayError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingContext
            | RelayError::MissingFile
            | RelayError::EmptyFilename
            | RelayError::Multipart(_) => StatusCode::BAD_REQUEST,
            RelayError::TargetNotAllowed(_) => StatusCode::FORBIDDEN,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "relay request failed");
        } else {
            tracing::debug!(error = %self, "relay request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

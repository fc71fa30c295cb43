//! Per-request relay context.
//!
//! # Responsibilities
//! - Extract the target base URL and credential from inbound headers
//! - Reject requests missing either value before any downstream call
//! - Build downstream API URLs from the context
//!
//! # Design Decisions
//! - The credential is opaque; Basic, Bearer, and token schemes all pass
//!   through verbatim, the caller owns the format
//! - Trailing slashes on the target are stripped so URL joins are stable

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::http::error::RelayError;

/// Header carrying the downstream base URL, supplied per request.
pub const X_TARGET_URL: &str = "x-target-url";

/// Fixed downstream REST prefix.
pub const API_PREFIX: &str = "/rest/api/2/";

/// Values every relay operation needs, built fresh from inbound headers.
#[derive(Debug, Clone)]
pub struct RelayContext {
    /// Downstream base URL with any trailing slash stripped.
    pub target_base: String,
    /// Opaque `Authorization` value, forwarded verbatim.
    pub credential: String,
}

impl RelayContext {
    /// Downstream URL for an API path under the fixed REST prefix.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.target_base,
            API_PREFIX,
            path.trim_start_matches('/')
        )
    }
}

impl<S> FromRequestParts<S> for RelayContext
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let target_base = parts
            .headers
            .get(X_TARGET_URL)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .trim_end_matches('/')
            .to_string();
        let credential = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if target_base.is_empty() || credential.is_empty() {
            return Err(RelayError::MissingContext);
        }

        Ok(Self {
            target_base,
            credential,
        })
    }
}

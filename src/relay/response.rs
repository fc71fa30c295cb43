//! Downstream response translation.
//!
//! # Design Decisions
//! - The downstream status code is always preserved
//! - Bodies that parse as JSON are re-emitted as JSON; anything else is
//!   relayed as raw text
//! - Reading the body can still fail at the transport level; that surfaces
//!   as an upstream error like any other network failure

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::http::error::RelayError;

/// Relay a downstream response back to the caller: same status, JSON body
/// when the downstream body parses as JSON, raw text otherwise.
pub async fn relay_body(resp: reqwest::Response) -> Result<Response, RelayError> {
    let status = relay_status(resp.status());
    let text = resp.text().await?;

    Ok(match serde_json::from_str::<Value>(&text) {
        Ok(value) => (status, Json(value)).into_response(),
        Err(_) => (status, text).into_response(),
    })
}

/// Carry a downstream status code over to the outbound response.
pub fn relay_status(status: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
}

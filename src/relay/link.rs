//! Issue link creation.
//!
//! `POST /api/relay/link` forwards the JSON body verbatim to
//! `{target}/rest/api/2/issueLink`. Jira answers link creation with 201 or
//! 204 and an empty-ish body; both collapse to `{"success": true}` for the
//! frontend. Every other status is normalized to `{"error": <body>}` with
//! the downstream status preserved.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::http::context::RelayContext;
use crate::http::error::RelayError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::client::{NO_CHECK, X_ATLASSIAN_TOKEN};
use crate::relay::response::relay_status;

/// Handler for `POST /api/relay/link`.
pub async fn create_link(
    State(state): State<AppState>,
    ctx: RelayContext,
    body: Bytes,
) -> Result<Response, RelayError> {
    state.upstream.ensure_allowed(&ctx)?;
    let start = Instant::now();

    let url = ctx.api_url("issueLink");
    tracing::debug!(url = %url, "creating issue link");

    // No Accept header here: the success body is discarded anyway.
    let resp = state
        .upstream
        .http()
        .post(&url)
        .header(header::AUTHORIZATION, &ctx.credential)
        .header(header::CONTENT_TYPE, "application/json")
        .header(X_ATLASSIAN_TOKEN, NO_CHECK)
        .body(body)
        .send()
        .await?;

    let status = resp.status();
    metrics::record_relay("link", status.as_u16(), start);

    if status == reqwest::StatusCode::CREATED || status == reqwest::StatusCode::NO_CONTENT {
        Ok((StatusCode::OK, Json(json!({ "success": true }))).into_response())
    } else {
        let text = resp.text().await?;
        tracing::debug!(status = %status, "issue link creation failed downstream");
        Ok((relay_status(status), Json(json!({ "error": text }))).into_response())
    }
}

//! Generic Jira API passthrough.
//!
//! Forwards `GET/POST/PUT/DELETE /api/relay/{*path}` to
//! `{target}/rest/api/2/{path}`: GET carries the inbound query string
//! verbatim, POST/PUT carry the inbound body as JSON, DELETE carries
//! nothing. The downstream status and body come back unmodified.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header;
use axum::http::Method;
use axum::response::Response;

use crate::http::context::RelayContext;
use crate::http::error::RelayError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::client::{NO_CHECK, X_ATLASSIAN_TOKEN};
use crate::relay::response::relay_body;

/// Handler for the generic passthrough route.
pub async fn passthrough(
    State(state): State<AppState>,
    ctx: RelayContext,
    Path(path): Path<String>,
    method: Method,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Response, RelayError> {
    state.upstream.ensure_allowed(&ctx)?;
    let start = Instant::now();

    // GET forwards the raw query string untouched; appending it to the URL
    // avoids any re-encoding of caller-supplied parameters like jql.
    let mut url = ctx.api_url(&path);
    if method == Method::GET {
        if let Some(query) = &query {
            url = format!("{url}?{query}");
        }
    }

    tracing::debug!(method = %method, url = %url, "relaying request");

    let mut request = state
        .upstream
        .http()
        .request(method.clone(), &url)
        .header(header::AUTHORIZATION, &ctx.credential)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "application/json")
        .header(X_ATLASSIAN_TOKEN, NO_CHECK);

    if method == Method::POST || method == Method::PUT {
        request = request.body(body);
    }

    let resp = request.send().await?;
    let status = resp.status();

    tracing::debug!(status = %status, url = %url, "downstream responded");
    metrics::record_relay("passthrough", status.as_u16(), start);

    relay_body(resp).await
}

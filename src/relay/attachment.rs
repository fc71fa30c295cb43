//! Attachment upload.
//!
//! `POST /api/relay/attachment/{issue_key}` re-encodes the inbound `file`
//! multipart field as a downstream multipart POST to
//! `{target}/rest/api/2/issue/{issue_key}/attachments`, preserving the
//! original filename and content type. The multipart encoder owns the
//! downstream `Content-Type`.

use std::time::Instant;

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::http::context::RelayContext;
use crate::http::error::RelayError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::client::{NO_CHECK, X_ATLASSIAN_TOKEN};
use crate::relay::response::{relay_body, relay_status};

/// One file lifted out of the inbound multipart body.
struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    data: Vec<u8>,
}

/// Pull the `file` field out of the multipart stream. Absent field and
/// empty filename are distinct caller errors.
async fn extract_file(multipart: &mut Multipart) -> Result<UploadedFile, RelayError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        if filename.is_empty() {
            return Err(RelayError::EmptyFilename);
        }
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?.to_vec();
        return Ok(UploadedFile {
            filename,
            content_type,
            data,
        });
    }
    Err(RelayError::MissingFile)
}

/// Handler for `POST /api/relay/attachment/{issue_key}`.
pub async fn upload_attachment(
    State(state): State<AppState>,
    ctx: RelayContext,
    Path(issue_key): Path<String>,
    mut multipart: Multipart,
) -> Result<Response, RelayError> {
    state.upstream.ensure_allowed(&ctx)?;
    let file = extract_file(&mut multipart).await?;
    let start = Instant::now();

    let url = ctx.api_url(&format!("issue/{issue_key}/attachments"));
    tracing::debug!(url = %url, filename = %file.filename, size = file.data.len(), "uploading attachment");

    let mut part = reqwest::multipart::Part::bytes(file.data).file_name(file.filename);
    if let Some(content_type) = &file.content_type {
        part = part.mime_str(content_type)?;
    }
    let form = reqwest::multipart::Form::new().part("file", part);

    let resp = state
        .upstream
        .http()
        .post(&url)
        .header(header::AUTHORIZATION, &ctx.credential)
        .header(X_ATLASSIAN_TOKEN, NO_CHECK)
        .multipart(form)
        .send()
        .await?;

    let status = resp.status();
    metrics::record_relay("attachment", status.as_u16(), start);

    if status == reqwest::StatusCode::OK {
        relay_body(resp).await
    } else {
        let text = resp.text().await?;
        tracing::debug!(status = %status, "attachment upload failed downstream");
        Ok((relay_status(status), Json(json!({ "error": text }))).into_response())
    }
}

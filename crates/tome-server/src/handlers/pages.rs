//! Pages API endpoint.
//!
//! Returns a JSON payload for one page: metadata plus the extracted
//! plain text. Supports conditional requests via `ETag`/`If-None-Match`
//! and advertises `Last-Modified` from the CMS record timestamp.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::split_category_path;
use crate::state::AppState;

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
struct PageResponse {
    /// Page metadata.
    meta: PageMeta,
    /// Extracted plain text.
    content: String,
}

/// Page metadata.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    /// Page title.
    title: String,
    /// Absolute URL path.
    url: String,
    /// Owning category slug.
    category: String,
    /// Page description.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Last modification time (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modified: Option<String>,
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let (category, doc_path) = split_category_path(&path);
    let snapshot = state.site.snapshot();

    let page = snapshot
        .page(category, doc_path)
        .ok_or_else(|| ServerError::PageNotFound(path.clone()))?;

    // Compute ETag and answer conditional requests
    let etag = compute_etag(&state.version, &page.text);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let response = PageResponse {
        meta: PageMeta {
            title: page.title.clone(),
            url: page.url.clone(),
            category: page.category_slug.clone(),
            description: page.description.clone(),
            last_modified: page.updated_at.map(|t| t.to_rfc3339()),
        },
        content: page.text.clone(),
    };

    let mut response = (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(response),
    )
        .into_response();

    if let Some(updated_at) = page.updated_at {
        let http_date = updated_at.format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        if let Ok(value) = HeaderValue::from_str(&http_date) {
            response.headers_mut().insert(header::LAST_MODIFIED, value);
        }
    }

    Ok(response)
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

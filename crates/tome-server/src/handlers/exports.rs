//! LLM export endpoints.
//!
//! Three plain-text routes for machine consumption:
//!
//! - `GET /llms.txt` - Markdown link list of every page, grouped by category
//! - `GET /llms-full.txt` - every page's extracted text in one document
//! - `GET /llms.mdx/{*path}` - one page's extracted text, addressed by
//!   category slug and nested doc path
//!
//! Content only changes when the CMS pings the revalidation endpoint, so
//! all three are cached indefinitely.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::ServerError;
use crate::handlers::split_category_path;
use crate::state::AppState;

/// Cache-Control for export responses: cached indefinitely, no revalidation.
const CACHE_FOREVER: &str = "public, max-age=31536000, immutable";

/// Build a cached plain-text response.
fn plain_text(body: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_FOREVER),
        ],
        body,
    )
}

/// Handle GET /llms.txt.
pub(crate) async fn llms_index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.site.snapshot();
    plain_text(snapshot.link_index(state.site.title()))
}

/// Handle GET /llms-full.txt.
pub(crate) async fn llms_full(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.site.snapshot();
    plain_text(snapshot.full_text())
}

/// Handle GET /llms.mdx/{*path}.
///
/// The first path segment is the category slug, the rest the nested doc
/// path (empty for the category index doc).
pub(crate) async fn llms_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let (category, doc_path) = split_category_path(&path);
    let snapshot = state.site.snapshot();

    if !snapshot.categories().iter().any(|c| c.slug == category) {
        return Err(ServerError::CategoryNotFound(category.to_owned()));
    }

    let page = snapshot
        .page(category, doc_path)
        .ok_or_else(|| ServerError::PageNotFound(path.clone()))?;

    Ok(plain_text(page.llm_text()).into_response())
}

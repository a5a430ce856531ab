//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No page at the given path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// No category with the given slug.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::CategoryNotFound(slug) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Category not found", "category": slug}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

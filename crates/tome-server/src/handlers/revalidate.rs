//! Revalidation endpoint.
//!
//! The CMS calls `POST /api/revalidate` from its after-change hook so
//! edits become visible without restarting the server. Invalidation is
//! lock-free; the next request rebuilds the snapshot.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for POST /api/revalidate.
#[derive(Serialize)]
pub(crate) struct RevalidateResponse {
    /// Always true; failures surface as transport errors.
    revalidated: bool,
}

/// Handle POST /api/revalidate.
pub(crate) async fn revalidate(State(state): State<Arc<AppState>>) -> Json<RevalidateResponse> {
    state.site.invalidate();
    tracing::info!("Site snapshot invalidated");
    Json(RevalidateResponse { revalidated: true })
}

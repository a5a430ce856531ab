//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use tome_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site snapshot holder.
    pub(crate) site: Arc<Site>,
    /// Application version for `ETag` computation.
    pub(crate) version: String,
}

//! Site snapshot and page lookup for Tome.
//!
//! This crate turns raw content records into the structure the server and
//! exporter consume:
//!
//! - [`SiteState`]: immutable snapshot of every page with its reconstructed
//!   path, URL, and extracted plain text
//! - [`Site`]: snapshot holder with cached reloads and explicit
//!   invalidation
//!
//! # Thread Safety
//!
//! `Site` is designed for concurrent access:
//! - `snapshot()` returns `Arc<SiteState>` with minimal locking
//! - reloads use double-checked locking so concurrent requests trigger at
//!   most one rebuild
//! - `invalidate()` is lock-free (atomic flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use tome_content::JsonStore;
//! use tome_site::{Site, SiteConfig};
//!
//! let store = Arc::new(JsonStore::new(PathBuf::from("content")));
//! let site = Site::new(store, SiteConfig::default());
//!
//! let state = site.snapshot();
//! if let Some(page) = state.page("guides", "setup/install") {
//!     println!("{}", page.llm_text());
//! }
//! ```

mod site;
mod state;

pub use site::{Site, SiteConfig};
pub use state::{CategoryInfo, Page, SiteState};

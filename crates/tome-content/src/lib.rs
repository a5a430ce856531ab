//! Content records and store abstraction for Tome.
//!
//! The CMS manages two collections: categories (top-level groupings) and
//! docs (pages, optionally nested under a parent doc). This crate provides:
//!
//! - [`Category`] and [`Doc`], read-only projections of the CMS records
//! - [`ContentStore`], the trait dependent crates consume content through
//! - [`JsonStore`], a snapshot-directory backend reading the CMS export
//! - [`MockStore`] for testing (behind the `mock` feature flag)
//! - [`path_segments`]/[`doc_path`], parent-chain path reconstruction
//!
//! Abstracting the store keeps site-structure logic testable without a
//! snapshot on disk and leaves room for other backends later.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use tome_content::{ContentStore, JsonStore};
//!
//! let store = JsonStore::new(PathBuf::from("content"));
//! for category in store.categories()? {
//!     let docs = store.docs_in_category(&category.id)?;
//!     println!("{}: {} docs", category.slug, docs.len());
//! }
//! ```

mod json;
#[cfg(feature = "mock")]
mod mock;
mod path;
mod records;
mod store;

pub use json::JsonStore;
#[cfg(feature = "mock")]
pub use mock::MockStore;
pub use path::{INDEX_SLUG, PathError, doc_path, index_by_id, path_segments};
pub use records::{Category, Doc, Id, RecordRef};
pub use store::{ContentError, ContentErrorKind, ContentStore};

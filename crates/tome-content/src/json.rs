//! JSON snapshot store.
//!
//! [`JsonStore`] reads a directory containing the CMS export: one JSON
//! file per collection (`categories.json`, `docs.json`). Each file holds
//! either a bare array of records or the CMS find-envelope
//! (`{"docs": [...]}`).
//!
//! Files are reread on every call; the site layer caches the built
//! structure, so a store-level cache would only go stale.

use std::path::PathBuf;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::records::{Category, Doc, Id};
use crate::store::{ContentError, ContentStore};

const BACKEND: &str = "Json";
const CATEGORIES_FILE: &str = "categories.json";
const DOCS_FILE: &str = "docs.json";

/// Content store reading CMS JSON snapshots from a directory.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use tome_content::{ContentStore, JsonStore};
///
/// let store = JsonStore::new(PathBuf::from("content"));
/// let categories = store.categories()?;
/// ```
#[derive(Debug)]
pub struct JsonStore {
    dir: PathBuf,
}

/// Collection file shape: bare array or CMS find-envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum Collection<T> {
    Bare(Vec<T>),
    Envelope {
        docs: Vec<T>,
    },
}

impl<T> Collection<T> {
    fn into_records(self) -> Vec<T> {
        match self {
            Self::Bare(records) | Self::Envelope { docs: records } => records,
        }
    }
}

impl JsonStore {
    /// Create a store reading snapshots from `dir`.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Read and parse one collection file.
    fn read_collection<T: DeserializeOwned>(
        &self,
        file: &'static str,
    ) -> Result<Vec<T>, ContentError> {
        let path = self.dir.join(file);
        let data = std::fs::read_to_string(&path)
            .map_err(|e| ContentError::io(e).with_backend(BACKEND).with_collection(file))?;
        let collection: Collection<T> = serde_json::from_str(&data).map_err(|e| {
            ContentError::invalid_data(e)
                .with_backend(BACKEND)
                .with_collection(file)
        })?;
        Ok(collection.into_records())
    }
}

impl ContentStore for JsonStore {
    fn categories(&self) -> Result<Vec<Category>, ContentError> {
        let mut categories: Vec<Category> = self.read_collection(CATEGORIES_FILE)?;
        categories.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.slug.cmp(&b.slug)));
        Ok(categories)
    }

    fn docs_in_category(&self, category: &Id) -> Result<Vec<Doc>, ContentError> {
        let docs: Vec<Doc> = self.read_collection(DOCS_FILE)?;
        Ok(docs
            .into_iter()
            .filter(|doc| doc.category.id() == category)
            .collect())
    }

    fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, ContentError> {
        let categories: Vec<Category> = self.read_collection(CATEGORIES_FILE)?;
        Ok(categories.into_iter().find(|c| c.slug == slug))
    }
}

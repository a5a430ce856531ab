//! Content store trait and error types.
//!
//! [`ContentStore`] abstracts how category and doc records reach the site
//! layer, and [`ContentError`] unifies error reporting across backends.
//!
//! Records returned by a store are read-only projections: no store method
//! creates, mutates, or deletes CMS data.

use crate::records::{Category, Doc, Id};

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentErrorKind {
    /// Collection or record does not exist.
    NotFound,
    /// Record data could not be parsed.
    InvalidData,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Other/unknown error category.
    Other,
}

/// Content store error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct ContentError {
    /// Semantic error category.
    pub kind: ContentErrorKind,
    /// Collection context (e.g., "docs", "categories").
    pub collection: Option<&'static str>,
    /// Backend identifier (e.g., "Json", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ContentError {
    /// Create a new content error.
    #[must_use]
    pub fn new(kind: ContentErrorKind) -> Self {
        Self {
            kind,
            collection: None,
            backend: None,
            source: None,
        }
    }

    /// Attach collection context.
    #[must_use]
    pub fn with_collection(mut self, collection: &'static str) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a content error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ContentErrorKind::NotFound,
            std::io::ErrorKind::TimedOut => ContentErrorKind::Unavailable,
            _ => ContentErrorKind::Other,
        };
        Self::new(kind).with_source(err)
    }

    /// Create an invalid-data error from a deserialization failure.
    #[must_use]
    pub fn invalid_data(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::new(ContentErrorKind::InvalidData).with_source(source)
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (collection: docs)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            ContentErrorKind::NotFound => "Not found",
            ContentErrorKind::InvalidData => "Invalid data",
            ContentErrorKind::Unavailable => "Unavailable",
            ContentErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(collection) = self.collection {
            write!(f, " (collection: {collection})")?;
        }

        Ok(())
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Store abstraction for category and doc retrieval.
///
/// Implementations are read-only views of the CMS data; snapshot caching
/// is the consumer's responsibility (the site layer caches a built
/// structure, not raw records).
pub trait ContentStore: Send + Sync {
    /// All categories, sorted ascending by ordering key.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the collection can't be read or parsed.
    fn categories(&self) -> Result<Vec<Category>, ContentError>;

    /// All docs belonging to one category.
    ///
    /// An unknown category id yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the collection can't be read or parsed.
    fn docs_in_category(&self, category: &Id) -> Result<Vec<Doc>, ContentError>;

    /// Look up a single category by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the collection can't be read or parsed.
    fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, ContentError>;
}

//! Record types.
//!
//! [`Category`] and [`Doc`] mirror the CMS collections' JSON output. Two
//! quirks of that output shape the deserialization code here:
//!
//! - Identifiers arrive as strings or numbers depending on the CMS's
//!   database adapter; [`Id`] accepts both and normalizes to a string key.
//! - Relationship fields arrive either as a bare identifier (query depth 0)
//!   or as the full embedded record (depth > 0); [`RecordRef`] accepts both
//!   and exposes just the identifier.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use tome_richtext::RichText;

/// Record identifier, normalized to a string key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    /// Create an identifier from a string value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = Id;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer identifier")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Id, E> {
                Ok(Id::new(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Id, E> {
                Ok(Id(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Id, E> {
                Ok(Id(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Reference to another record.
///
/// Bare form (`"abc"`, `7`) at query depth 0, embedded form
/// (`{"id": ..., ...}`) at depth > 0. Only the identifier is kept from the
/// embedded form; the referenced record is always resolved through a store
/// lookup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordRef {
    /// Bare identifier.
    Id(Id),
    /// Embedded record; extra fields are ignored.
    Embedded {
        /// Identifier of the embedded record.
        id: Id,
    },
}

impl RecordRef {
    /// The referenced record's identifier.
    #[must_use]
    pub fn id(&self) -> &Id {
        match self {
            Self::Id(id) | Self::Embedded { id } => id,
        }
    }
}

/// Top-level grouping of documentation docs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Record identifier.
    pub id: Id,
    /// URL slug.
    pub slug: String,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Ordering key; categories sort ascending by this value.
    #[serde(default)]
    pub order: i64,
    /// Optional icon media reference.
    #[serde(default)]
    pub icon: Option<RecordRef>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Category {
    /// Display title, falling back to the slug.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }
}

/// Single documentation page.
///
/// Belongs to one category and is optionally nested under a parent doc.
/// The parent chain determines the doc's URL path; see
/// [`path_segments`](crate::path_segments).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Doc {
    /// Record identifier.
    pub id: Id,
    /// URL slug; the literal `"index"` marks a landing page.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Optional description, shown in link lists.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional parent doc reference.
    #[serde(default)]
    pub parent: Option<RecordRef>,
    /// Owning category reference.
    pub category: RecordRef,
    /// Rich-text body; `null` in the export reads as an empty document.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: RichText,
    /// Last modification time, as recorded by the CMS.
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Deserialize a rich-text body, treating `null` as an empty document.
fn null_as_empty<'de, D>(deserializer: D) -> Result<RichText, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RichText>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_id_from_string() {
        let id: Id = serde_json::from_value(serde_json::json!("67ab")).unwrap();

        assert_eq!(id, Id::new("67ab"));
    }

    #[test]
    fn test_id_from_number() {
        let id: Id = serde_json::from_value(serde_json::json!(42)).unwrap();

        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_record_ref_bare_id() {
        let r: RecordRef = serde_json::from_value(serde_json::json!(7)).unwrap();

        assert_eq!(r.id().as_str(), "7");
    }

    #[test]
    fn test_record_ref_embedded() {
        let r: RecordRef = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "slug": "guide",
            "title": "Guide",
        }))
        .unwrap();

        assert_eq!(r.id(), &Id::new("abc"));
    }

    #[test]
    fn test_category_minimal() {
        let category: Category = serde_json::from_value(serde_json::json!({
            "id": 1,
            "slug": "getting-started",
        }))
        .unwrap();

        assert_eq!(category.slug, "getting-started");
        assert_eq!(category.order, 0);
        assert_eq!(category.display_title(), "getting-started");
        assert!(category.icon.is_none());
    }

    #[test]
    fn test_category_full() {
        let category: Category = serde_json::from_value(serde_json::json!({
            "id": "cat1",
            "slug": "guides",
            "title": "Guides",
            "order": 3,
            "icon": {"id": "media9", "url": "/media/icon.svg"},
            "description": "How-to guides",
        }))
        .unwrap();

        assert_eq!(category.display_title(), "Guides");
        assert_eq!(category.order, 3);
        assert_eq!(category.icon.unwrap().id(), &Id::new("media9"));
    }

    #[test]
    fn test_doc_with_bare_parent() {
        let doc: Doc = serde_json::from_value(serde_json::json!({
            "id": 3,
            "slug": "intro",
            "title": "Introduction",
            "parent": 2,
            "category": "cat1",
        }))
        .unwrap();

        assert_eq!(doc.parent.as_ref().unwrap().id().as_str(), "2");
        assert_eq!(doc.category.id(), &Id::new("cat1"));
        assert!(doc.updated_at.is_none());
    }

    #[test]
    fn test_doc_with_embedded_parent_and_timestamp() {
        let doc: Doc = serde_json::from_value(serde_json::json!({
            "id": "d2",
            "slug": "setup",
            "title": "Setup",
            "description": "Install steps",
            "parent": {"id": "d1", "slug": "guide", "category": "cat1"},
            "category": {"id": "cat1", "slug": "guides"},
            "updatedAt": "2026-03-01T12:00:00Z",
        }))
        .unwrap();

        assert_eq!(doc.parent.as_ref().unwrap().id(), &Id::new("d1"));
        assert!(doc.updated_at.is_some());
    }

    #[test]
    fn test_doc_without_content_defaults_empty() {
        let doc: Doc = serde_json::from_value(serde_json::json!({
            "id": 1,
            "slug": "index",
            "title": "Home",
            "category": 1,
        }))
        .unwrap();

        assert_eq!(doc.content.plain_text(), "");
    }

    #[test]
    fn test_doc_with_null_content_defaults_empty() {
        let doc: Doc = serde_json::from_value(serde_json::json!({
            "id": 1,
            "slug": "index",
            "title": "Home",
            "category": 1,
            "content": null,
        }))
        .unwrap();

        assert_eq!(doc.content.plain_text(), "");
    }
}

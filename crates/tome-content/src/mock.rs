//! Mock content store for testing.
//!
//! Provides [`MockStore`] for unit testing dependent crates without a
//! snapshot directory on disk.

use crate::records::{Category, Doc, Id};
use crate::store::{ContentError, ContentStore};

/// In-memory content store for testing.
///
/// Built with the `with_*` methods; immutable afterwards. Categories sort
/// by ordering key like the real backends.
///
/// # Example
///
/// ```ignore
/// use tome_content::{Category, ContentStore, Id, MockStore, RecordRef};
///
/// let store = MockStore::new()
///     .with_category(Category { /* ... */ })
///     .with_doc(Doc { /* ... */ });
///
/// let categories = store.categories().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    categories: Vec<Category>,
    docs: Vec<Doc>,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Add a doc.
    #[must_use]
    pub fn with_doc(mut self, doc: Doc) -> Self {
        self.docs.push(doc);
        self
    }
}

impl ContentStore for MockStore {
    fn categories(&self) -> Result<Vec<Category>, ContentError> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.slug.cmp(&b.slug)));
        Ok(categories)
    }

    fn docs_in_category(&self, category: &Id) -> Result<Vec<Doc>, ContentError> {
        Ok(self
            .docs
            .iter()
            .filter(|doc| doc.category.id() == category)
            .cloned()
            .collect())
    }

    fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, ContentError> {
        Ok(self.categories.iter().find(|c| c.slug == slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::records::RecordRef;

    fn category(id: &str, slug: &str, order: i64) -> Category {
        Category {
            id: Id::new(id),
            slug: slug.to_owned(),
            title: None,
            order,
            icon: None,
            description: None,
        }
    }

    fn doc(id: &str, slug: &str, category: &str) -> Doc {
        Doc {
            id: Id::new(id),
            slug: slug.to_owned(),
            title: slug.to_owned(),
            description: None,
            parent: None,
            category: RecordRef::Id(Id::new(category)),
            content: tome_richtext::RichText::default(),
            updated_at: None,
        }
    }

    #[test]
    fn test_mock_categories_sorted() {
        let store = MockStore::new()
            .with_category(category("2", "later", 9))
            .with_category(category("1", "first", 1));

        let categories = store.categories().unwrap();

        assert_eq!(categories[0].slug, "first");
        assert_eq!(categories[1].slug, "later");
    }

    #[test]
    fn test_mock_docs_filtered() {
        let store = MockStore::new()
            .with_doc(doc("10", "a", "1"))
            .with_doc(doc("11", "b", "2"));

        let docs = store.docs_in_category(&Id::new("1")).unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].slug, "a");
    }

    #[test]
    fn test_mock_category_by_slug() {
        let store = MockStore::new().with_category(category("1", "guides", 0));

        assert!(store.category_by_slug("guides").unwrap().is_some());
        assert!(store.category_by_slug("missing").unwrap().is_none());
    }
}

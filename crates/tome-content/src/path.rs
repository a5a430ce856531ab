//! Parent-chain path reconstruction.
//!
//! Docs reference their parent by id; a doc's URL path is the slugs of its
//! ancestor chain, topmost first, with landing-page segments
//! ([`INDEX_SLUG`]) elided. The chain is walked through an id lookup map
//! restricted to one category's docs.
//!
//! The data model does not enforce acyclic parent references, so the walk
//! carries a visited set: a chain that cycles back on itself is reported as
//! [`PathError::ParentCycle`] instead of looping forever. A parent id that
//! resolves to no doc in the map terminates the walk as if the chain ended.

use std::collections::{HashMap, HashSet};

use crate::records::{Doc, Id, RecordRef};

/// Reserved slug marking a category's or folder's landing page.
///
/// Elided from reconstructed paths: a category's index doc has the empty
/// path and is served at the category URL itself.
pub const INDEX_SLUG: &str = "index";

/// Error reconstructing a doc's path.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The parent chain revisited a doc.
    #[error("parent chain cycles back to doc {id}")]
    ParentCycle {
        /// Identifier of the first doc seen twice.
        id: Id,
    },
}

/// Build an id lookup map over one category's docs.
#[must_use]
pub fn index_by_id(docs: &[Doc]) -> HashMap<&Id, &Doc> {
    docs.iter().map(|doc| (&doc.id, doc)).collect()
}

/// Reconstruct a doc's path segments, topmost ancestor first.
///
/// Walks the parent chain through `by_id`, prepending each slug except
/// [`INDEX_SLUG`]. Stops when a doc has no parent reference or its parent
/// id resolves to nothing.
///
/// # Errors
///
/// Returns [`PathError::ParentCycle`] if the chain revisits a doc.
pub fn path_segments<'a>(
    doc: &'a Doc,
    by_id: &HashMap<&Id, &'a Doc>,
) -> Result<Vec<String>, PathError> {
    let mut segments = Vec::new();
    let mut visited: HashSet<&Id> = HashSet::new();
    let mut current = doc;

    loop {
        if !visited.insert(&current.id) {
            return Err(PathError::ParentCycle {
                id: current.id.clone(),
            });
        }
        if current.slug != INDEX_SLUG {
            segments.push(current.slug.clone());
        }
        match current
            .parent
            .as_ref()
            .map(RecordRef::id)
            .and_then(|id| by_id.get(id).copied())
        {
            Some(parent) => current = parent,
            None => break,
        }
    }

    segments.reverse();
    Ok(segments)
}

/// Reconstruct a doc's slash-joined path.
///
/// The empty string for a category's index doc.
///
/// # Errors
///
/// Returns [`PathError::ParentCycle`] if the chain revisits a doc.
pub fn doc_path(doc: &Doc, by_id: &HashMap<&Id, &Doc>) -> Result<String, PathError> {
    path_segments(doc, by_id).map(|segments| segments.join("/"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::records::RecordRef;

    fn doc(id: &str, slug: &str, parent: Option<&str>) -> Doc {
        Doc {
            id: Id::new(id),
            slug: slug.to_owned(),
            title: slug.to_owned(),
            description: None,
            parent: parent.map(|p| RecordRef::Id(Id::new(p))),
            category: RecordRef::Id(Id::new("cat")),
            content: tome_richtext::RichText::default(),
            updated_at: None,
        }
    }

    #[test]
    fn test_root_index_doc_has_empty_path() {
        let docs = vec![doc("1", "index", None)];
        let by_id = index_by_id(&docs);

        assert_eq!(doc_path(&docs[0], &by_id).unwrap(), "");
    }

    #[test]
    fn test_nested_path_elides_index_root() {
        let docs = vec![
            doc("1", "index", None),
            doc("2", "guide", Some("1")),
            doc("3", "intro", Some("2")),
        ];
        let by_id = index_by_id(&docs);

        assert_eq!(doc_path(&docs[2], &by_id).unwrap(), "guide/intro");
    }

    #[test]
    fn test_segments_ordered_topmost_first() {
        let docs = vec![
            doc("1", "guide", None),
            doc("2", "advanced", Some("1")),
            doc("3", "tuning", Some("2")),
        ];
        let by_id = index_by_id(&docs);

        assert_eq!(
            path_segments(&docs[2], &by_id).unwrap(),
            vec!["guide", "advanced", "tuning"]
        );
    }

    #[test]
    fn test_nested_index_segment_elided() {
        // A folder landing page: guide/index has path "guide", and a doc
        // under it skips the index segment too.
        let docs = vec![
            doc("1", "guide", None),
            doc("2", "index", Some("1")),
            doc("3", "deep", Some("2")),
        ];
        let by_id = index_by_id(&docs);

        assert_eq!(doc_path(&docs[1], &by_id).unwrap(), "guide");
        assert_eq!(doc_path(&docs[2], &by_id).unwrap(), "guide/deep");
    }

    #[test]
    fn test_unresolved_parent_terminates_walk() {
        let docs = vec![doc("3", "orphan", Some("99"))];
        let by_id = index_by_id(&docs);

        assert_eq!(doc_path(&docs[0], &by_id).unwrap(), "orphan");
    }

    #[test]
    fn test_embedded_parent_reference_resolves() {
        let mut child = doc("2", "child", None);
        child.parent = Some(RecordRef::Embedded { id: Id::new("1") });
        let docs = vec![doc("1", "top", None), child];
        let by_id = index_by_id(&docs);

        assert_eq!(doc_path(&docs[1], &by_id).unwrap(), "top/child");
    }

    #[test]
    fn test_cycle_is_reported_not_looped() {
        let docs = vec![doc("1", "a", Some("2")), doc("2", "b", Some("1"))];
        let by_id = index_by_id(&docs);

        let err = doc_path(&docs[0], &by_id).unwrap_err();

        assert_eq!(err, PathError::ParentCycle { id: Id::new("1") });
    }

    #[test]
    fn test_self_parent_is_reported() {
        let docs = vec![doc("1", "selfish", Some("1"))];
        let by_id = index_by_id(&docs);

        assert!(matches!(
            doc_path(&docs[0], &by_id),
            Err(PathError::ParentCycle { .. })
        ));
    }

    #[test]
    fn test_path_building_is_deterministic() {
        let docs = vec![doc("1", "guide", None), doc("2", "intro", Some("1"))];
        let by_id = index_by_id(&docs);

        let first = doc_path(&docs[1], &by_id).unwrap();
        let second = doc_path(&docs[1], &by_id).unwrap();

        assert_eq!(first, second);
    }
}

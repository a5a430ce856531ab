//! Snapshot loading and caching.
//!
//! [`Site`] builds [`SiteState`] snapshots from a [`ContentStore`] and
//! hands them out as `Arc`s. Snapshots are cached until
//! [`Site::invalidate`] is called (the CMS pings the revalidation endpoint
//! after an editor saves).
//!
//! # Thread Safety
//!
//! - `snapshot()` uses double-checked locking: a fast atomic check, then a
//!   reload serialized behind a `Mutex` with a recheck.
//! - Readers keep their `Arc<SiteState>` across invalidations; a reload
//!   swaps the `RwLock`-guarded current snapshot atomically.
//! - A reload failure keeps the current snapshot and logs a warning; the
//!   request path never fails on store errors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use tome_content::{Category, ContentError, ContentStore, Doc, index_by_id, path_segments};

use crate::state::{CategoryInfo, Page, SiteState};

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// URL prefix for page links (no trailing slash).
    pub base_path: String,
    /// Site title, used as the link index header.
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/docs".to_owned(),
            title: "Documentation".to_owned(),
        }
    }
}

/// Site snapshot holder with cached reloads.
///
/// See the [crate docs](crate) for an example.
pub struct Site {
    store: Arc<dyn ContentStore>,
    config: SiteConfig,
    /// Mutex for serializing reload operations.
    reload_lock: Mutex<()>,
    /// Current snapshot (atomically swappable).
    current_state: RwLock<Arc<SiteState>>,
    /// Cache validity flag.
    cache_valid: AtomicBool,
}

impl Site {
    /// Create a new site over a content store.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>, config: SiteConfig) -> Self {
        Self {
            store,
            config,
            reload_lock: Mutex::new(()),
            current_state: RwLock::new(Arc::new(SiteState::default())),
            cache_valid: AtomicBool::new(false),
        }
    }

    /// Site title from the configuration.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Current snapshot without a validity check.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    fn state(&self) -> Arc<SiteState> {
        self.current_state.read().unwrap().clone()
    }

    /// Get the current snapshot, reloading from the store if invalid.
    ///
    /// Uses double-checked locking:
    /// 1. Fast path: return the current snapshot if the cache is valid
    /// 2. Slow path: acquire `reload_lock`, recheck, then rebuild
    ///
    /// A failed rebuild keeps the current snapshot (empty on first load)
    /// and logs a warning; the cache is marked valid either way, so
    /// recovery happens on the next [`invalidate`](Self::invalidate).
    ///
    /// # Panics
    ///
    /// Panics if internal locks are poisoned.
    #[must_use]
    pub fn snapshot(&self) -> Arc<SiteState> {
        // Fast path: cache valid
        if self.cache_valid.load(Ordering::Acquire) {
            return self.state();
        }

        // Slow path: acquire reload lock
        let _guard = self.reload_lock.lock().unwrap();

        // Double-check after acquiring lock
        if self.cache_valid.load(Ordering::Acquire) {
            return self.state();
        }

        let state = match self.load_from_store() {
            Ok(state) => Arc::new(state),
            Err(e) => {
                tracing::warn!(error = %e, "Content reload failed, keeping current snapshot");
                let current = self.state();
                self.cache_valid.store(true, Ordering::Release);
                return current;
            }
        };

        *self.current_state.write().unwrap() = Arc::clone(&state);
        self.cache_valid.store(true, Ordering::Release);

        state
    }

    /// Invalidate the cached snapshot.
    ///
    /// The next [`snapshot`](Self::snapshot) call reloads. Current readers
    /// continue using their existing `Arc<SiteState>`.
    pub fn invalidate(&self) {
        self.cache_valid.store(false, Ordering::Release);
    }

    /// Build a fresh snapshot from the store.
    ///
    /// Per-category and per-doc failures degrade: a category whose docs
    /// can't be read is kept empty, a doc with a cyclic parent chain is
    /// skipped, both with warnings.
    fn load_from_store(&self) -> Result<SiteState, ContentError> {
        let categories = self.store.categories()?;

        let mut infos = Vec::with_capacity(categories.len());
        let mut groups = Vec::with_capacity(categories.len());

        for category in categories {
            let docs = match self.store.docs_in_category(&category.id) {
                Ok(docs) => docs,
                Err(e) => {
                    tracing::warn!(
                        category = %category.slug,
                        error = %e,
                        "Failed to load category docs"
                    );
                    Vec::new()
                }
            };

            let mut pages = self.build_pages(&category, &docs);
            pages.sort_by(|a, b| a.path.cmp(&b.path));

            let title = category.display_title().to_owned();
            infos.push(CategoryInfo {
                slug: category.slug,
                title,
                description: category.description,
            });
            groups.push(pages);
        }

        Ok(SiteState::new(infos, groups))
    }

    /// Resolve one category's docs into pages.
    fn build_pages(&self, category: &Category, docs: &[Doc]) -> Vec<Page> {
        let by_id = index_by_id(docs);
        let mut pages = Vec::with_capacity(docs.len());

        for doc in docs {
            let segments = match path_segments(doc, &by_id) {
                Ok(segments) => segments,
                Err(e) => {
                    tracing::warn!(doc = %doc.id, error = %e, "Skipping doc");
                    continue;
                }
            };
            let path = segments.join("/");
            let url = if path.is_empty() {
                format!("{}/{}", self.config.base_path, category.slug)
            } else {
                format!("{}/{}/{}", self.config.base_path, category.slug, path)
            };

            pages.push(Page {
                title: doc.title.clone(),
                description: doc.description.clone(),
                category_slug: category.slug.clone(),
                path,
                segments,
                url,
                text: doc.content.plain_text(),
                updated_at: doc.updated_at,
            });
        }

        pages
    }
}

#[cfg(test)]
mod tests {
    // Ensure Site is Send + Sync for use with Arc
    static_assertions::assert_impl_all!(super::Site: Send, Sync);

    use pretty_assertions::assert_eq;
    use tome_content::{Category, Doc, Id, MockStore, RecordRef};
    use tome_richtext::{Node, RichText};

    use super::*;

    fn category(id: &str, slug: &str, order: i64) -> Category {
        Category {
            id: Id::new(id),
            slug: slug.to_owned(),
            title: Some(titlecase(slug)),
            order,
            icon: None,
            description: None,
        }
    }

    fn titlecase(slug: &str) -> String {
        let mut chars = slug.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().collect::<String>() + chars.as_str()
        })
    }

    fn doc(id: &str, slug: &str, category: &str, parent: Option<&str>, body: &str) -> Doc {
        Doc {
            id: Id::new(id),
            slug: slug.to_owned(),
            title: titlecase(slug),
            description: None,
            parent: parent.map(|p| RecordRef::Id(Id::new(p))),
            category: RecordRef::Id(Id::new(category)),
            content: RichText {
                root: Some(Node::Root {
                    children: vec![Node::Paragraph {
                        children: vec![Node::Text {
                            text: body.to_owned(),
                        }],
                    }],
                }),
            },
            updated_at: None,
        }
    }

    fn sample_site() -> Site {
        let store = MockStore::new()
            .with_category(category("c1", "guides", 1))
            .with_category(category("c2", "reference", 2))
            .with_doc(doc("1", "index", "c1", None, "Welcome."))
            .with_doc(doc("2", "guide", "c1", Some("1"), "Guide body."))
            .with_doc(doc("3", "intro", "c1", Some("2"), "Intro body."))
            .with_doc(doc("4", "api", "c2", None, "API body."));
        Site::new(Arc::new(store), SiteConfig::default())
    }

    #[test]
    fn test_snapshot_builds_pages_with_paths() {
        let site = sample_site();

        let state = site.snapshot();

        assert_eq!(state.pages().len(), 4);
        assert_eq!(state.page("guides", "").unwrap().title, "Index");
        assert_eq!(
            state.page("guides", "guide/intro").unwrap().url,
            "/docs/guides/guide/intro"
        );
    }

    #[test]
    fn test_path_matching_resolves_nested_doc() {
        let site = sample_site();

        let state = site.snapshot();

        assert!(state.page("guides", "guide/intro").is_some());
        assert!(state.page("guides", "guide/missing").is_none());
    }

    #[test]
    fn test_snapshot_cached_until_invalidated() {
        let site = sample_site();

        let first = site.snapshot();
        let second = site.snapshot();

        assert!(Arc::ptr_eq(&first, &second));

        site.invalidate();
        let third = site.snapshot();

        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(first.pages().len(), third.pages().len());
    }

    #[test]
    fn test_cyclic_parent_chain_skips_doc() {
        let store = MockStore::new()
            .with_category(category("c1", "guides", 1))
            .with_doc(doc("1", "a", "c1", Some("2"), "A."))
            .with_doc(doc("2", "b", "c1", Some("1"), "B."))
            .with_doc(doc("3", "ok", "c1", None, "Fine."));
        let site = Site::new(Arc::new(store), SiteConfig::default());

        let state = site.snapshot();

        // Both cycle members skipped, the clean doc survives.
        assert_eq!(state.pages().len(), 1);
        assert_eq!(state.pages()[0].path, "ok");
    }

    #[test]
    fn test_categories_ordered_in_snapshot() {
        let site = sample_site();

        let state = site.snapshot();
        let slugs: Vec<&str> = state.categories().iter().map(|c| c.slug.as_str()).collect();

        assert_eq!(slugs, vec!["guides", "reference"]);
    }

    #[test]
    fn test_base_path_configurable() {
        let store = MockStore::new()
            .with_category(category("c1", "guides", 1))
            .with_doc(doc("1", "setup", "c1", None, "Setup."));
        let site = Site::new(
            Arc::new(store),
            SiteConfig {
                base_path: "/handbook".to_owned(),
                title: "Handbook".to_owned(),
            },
        );

        let state = site.snapshot();

        assert_eq!(state.page("guides", "setup").unwrap().url, "/handbook/guides/setup");
    }

    #[test]
    fn test_empty_store_yields_empty_snapshot() {
        let site = Site::new(Arc::new(MockStore::new()), SiteConfig::default());

        let state = site.snapshot();

        assert!(state.pages().is_empty());
    }

    #[test]
    fn test_concurrent_snapshot_access() {
        use std::thread;

        let site = Arc::new(sample_site());

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let site = Arc::clone(&site);
                thread::spawn(move || {
                    if i % 2 == 0 {
                        site.invalidate();
                    } else {
                        let state = site.snapshot();
                        assert!(state.page("reference", "api").is_some());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let state = site.snapshot();
        assert_eq!(state.pages().len(), 4);
    }
}

//! Immutable site snapshot.
//!
//! [`SiteState`] stores every page in a flat `Vec<Page>`, ordered by
//! category ordering key and path, with a `HashMap` index for O(1)
//! category/path lookups. It also renders the two aggregate export
//! documents (link index and full text) so the server and the file
//! exporter share one implementation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Category summary carried in the snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// URL slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One documentation page, fully resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Page title.
    pub title: String,
    /// Optional description, shown in link lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning category slug.
    pub category_slug: String,
    /// Doc path within the category (`""` for the category index).
    pub path: String,
    /// Path segments, topmost ancestor first (empty for the index).
    #[serde(skip)]
    pub segments: Vec<String>,
    /// Absolute URL path (e.g., `/docs/guides/setup`).
    pub url: String,
    /// Extracted plain text of the body.
    pub text: String,
    /// Last modification time from the CMS record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Page {
    /// LLM-friendly text form: title header, source URL, body.
    #[must_use]
    pub fn llm_text(&self) -> String {
        format!("# {}\nURL: {}\n\n{}", self.title, self.url, self.text)
    }
}

/// Immutable snapshot of the whole site.
///
/// Built by [`Site`](crate::Site) from a content store; never mutated
/// after construction.
#[derive(Debug, Default)]
pub struct SiteState {
    categories: Vec<CategoryInfo>,
    pages: Vec<Page>,
    /// Page indices per category, aligned with `categories`.
    by_category: Vec<Vec<usize>>,
    /// (category slug, doc path) -> page index.
    lookup: HashMap<(String, String), usize>,
}

impl SiteState {
    /// Create a snapshot from categories and their pages.
    ///
    /// `groups` must be aligned with `categories`: one page list per
    /// category, already ordered. Later duplicates of a (category, path)
    /// pair lose the lookup slot to the first.
    pub(crate) fn new(categories: Vec<CategoryInfo>, groups: Vec<Vec<Page>>) -> Self {
        let mut pages = Vec::new();
        let mut by_category = Vec::with_capacity(categories.len());
        let mut lookup = HashMap::new();

        for (category, group) in categories.iter().zip(groups) {
            let mut indices = Vec::with_capacity(group.len());
            for page in group {
                let idx = pages.len();
                lookup
                    .entry((category.slug.clone(), page.path.clone()))
                    .or_insert(idx);
                indices.push(idx);
                pages.push(page);
            }
            by_category.push(indices);
        }

        Self {
            categories,
            pages,
            by_category,
            lookup,
        }
    }

    /// All pages, ordered by category then path.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// All categories, in display order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    /// Look up a page by category slug and doc path.
    ///
    /// The category index page has the empty path.
    #[must_use]
    pub fn page(&self, category_slug: &str, path: &str) -> Option<&Page> {
        let idx = *self
            .lookup
            .get(&(category_slug.to_owned(), path.to_owned()))?;
        self.pages.get(idx)
    }

    /// Pages grouped per category, in display order.
    #[must_use]
    pub fn grouped(&self) -> Vec<(&CategoryInfo, Vec<&Page>)> {
        self.categories
            .iter()
            .zip(&self.by_category)
            .map(|(category, indices)| {
                let group = indices.iter().map(|&idx| &self.pages[idx]).collect();
                (category, group)
            })
            .collect()
    }

    /// Every valid export path parameter set.
    ///
    /// One `[category]` entry per category, plus one
    /// `[category, segments...]` entry per nested page. Matches the
    /// pre-generation enumeration: a category without an index doc still
    /// gets its bare entry (requesting it yields not-found).
    #[must_use]
    pub fn param_sets(&self) -> Vec<Vec<String>> {
        let mut params = Vec::new();
        for category in &self.categories {
            params.push(vec![category.slug.clone()]);
        }
        for (category, group) in self.grouped() {
            for page in group {
                if page.segments.is_empty() {
                    continue;
                }
                let mut set = Vec::with_capacity(page.segments.len() + 1);
                set.push(category.slug.clone());
                set.extend(page.segments.iter().cloned());
                params.push(set);
            }
        }
        params
    }

    /// Markdown link index: every page grouped by category.
    ///
    /// Format: a `# {title}` header, then per category a `## {slug}`
    /// section with one `- [title](url): description` line per page.
    #[must_use]
    pub fn link_index(&self, title: &str) -> String {
        let mut sections = vec![format!("# {title}")];

        for (category, group) in self.grouped() {
            let lines: Vec<String> = group
                .iter()
                .map(|page| {
                    format!(
                        "- [{}]({}): {}",
                        page.title,
                        page.url,
                        page.description.as_deref().unwrap_or_default()
                    )
                })
                .collect();

            sections.push(format!("## {}", category.slug));
            sections.push(lines.join("\n"));
        }

        sections.join("\n\n")
    }

    /// Full-text export: every page's LLM text, blank-line separated.
    #[must_use]
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .map(Page::llm_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn category(slug: &str) -> CategoryInfo {
        CategoryInfo {
            slug: slug.to_owned(),
            title: slug.to_owned(),
            description: None,
        }
    }

    fn page(category: &str, path: &str, title: &str) -> Page {
        let segments: Vec<String> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').map(str::to_owned).collect()
        };
        Page {
            title: title.to_owned(),
            description: None,
            category_slug: category.to_owned(),
            path: path.to_owned(),
            segments,
            url: if path.is_empty() {
                format!("/docs/{category}")
            } else {
                format!("/docs/{category}/{path}")
            },
            text: format!("Body of {title}."),
            updated_at: None,
        }
    }

    fn sample_state() -> SiteState {
        SiteState::new(
            vec![category("guides"), category("reference")],
            vec![
                vec![
                    page("guides", "", "Guides"),
                    page("guides", "setup", "Setup"),
                    page("guides", "setup/install", "Install"),
                ],
                vec![page("reference", "api", "API")],
            ],
        )
    }

    #[test]
    fn test_page_lookup() {
        let state = sample_state();

        assert_eq!(state.page("guides", "setup").unwrap().title, "Setup");
        assert_eq!(state.page("guides", "").unwrap().title, "Guides");
        assert!(state.page("guides", "missing").is_none());
        assert!(state.page("unknown", "setup").is_none());
    }

    #[test]
    fn test_pages_ordered_by_category_then_path() {
        let state = sample_state();

        let titles: Vec<&str> = state.pages().iter().map(|p| p.title.as_str()).collect();

        assert_eq!(titles, vec!["Guides", "Setup", "Install", "API"]);
    }

    #[test]
    fn test_grouped_aligns_categories_and_pages() {
        let state = sample_state();

        let grouped = state.grouped();

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0.slug, "guides");
        assert_eq!(grouped[0].1.len(), 3);
        assert_eq!(grouped[1].0.slug, "reference");
        assert_eq!(grouped[1].1.len(), 1);
    }

    #[test]
    fn test_param_sets_enumeration() {
        let state = sample_state();

        let params = state.param_sets();

        assert!(params.contains(&vec!["guides".to_owned()]));
        assert!(params.contains(&vec!["reference".to_owned()]));
        assert!(params.contains(&vec!["guides".to_owned(), "setup".to_owned()]));
        assert!(params.contains(&vec![
            "guides".to_owned(),
            "setup".to_owned(),
            "install".to_owned()
        ]));
        assert!(params.contains(&vec!["reference".to_owned(), "api".to_owned()]));
        // Index pages contribute no extra entry beyond the category's own.
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_llm_text_format() {
        let state = sample_state();

        let text = state.page("guides", "setup").unwrap().llm_text();

        assert_eq!(text, "# Setup\nURL: /docs/guides/setup\n\nBody of Setup.");
    }

    #[test]
    fn test_link_index_format() {
        let state = SiteState::new(
            vec![category("guides")],
            vec![vec![
                Page {
                    description: Some("Start here".to_owned()),
                    ..page("guides", "", "Guides")
                },
                page("guides", "setup", "Setup"),
            ]],
        );

        let index = state.link_index("My Docs");

        assert_eq!(
            index,
            "# My Docs\n\n\
             ## guides\n\n\
             - [Guides](/docs/guides): Start here\n\
             - [Setup](/docs/guides/setup): "
        );
    }

    #[test]
    fn test_full_text_joins_pages() {
        let state = SiteState::new(
            vec![category("guides")],
            vec![vec![page("guides", "", "Guides"), page("guides", "a", "A")]],
        );

        let full = state.full_text();

        assert_eq!(
            full,
            "# Guides\nURL: /docs/guides\n\nBody of Guides.\n\n\
             # A\nURL: /docs/guides/a\n\nBody of A."
        );
    }

    #[test]
    fn test_empty_state() {
        let state = SiteState::default();

        assert!(state.pages().is_empty());
        assert!(state.param_sets().is_empty());
        assert_eq!(state.full_text(), "");
        assert_eq!(state.link_index("Docs"), "# Docs");
    }
}

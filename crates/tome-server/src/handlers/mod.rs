//! HTTP request handlers.

pub(crate) mod exports;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod revalidate;

/// Split a multi-segment path into category slug and nested doc path.
///
/// The first segment names the category, the rest the doc path within it
/// (empty for the category index). Surrounding slashes are ignored.
pub(crate) fn split_category_path(path: &str) -> (&str, &str) {
    let path = path.trim_matches('/');
    path.split_once('/').map_or((path, ""), |(category, rest)| {
        (category, rest.trim_end_matches('/'))
    })
}

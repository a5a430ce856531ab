//! Navigation API endpoint.
//!
//! Returns categories with their pages for the documentation frontend
//! sidebar.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Categories in display order.
    categories: Vec<CategoryNav>,
}

/// One category with its pages.
#[derive(Serialize)]
struct CategoryNav {
    /// Display title.
    title: String,
    /// URL slug.
    slug: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Pages in the category, index first.
    pages: Vec<PageLink>,
}

/// Link to a single page.
#[derive(Serialize)]
struct PageLink {
    /// Display title.
    title: String,
    /// Absolute URL path.
    url: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Json<NavigationResponse> {
    let snapshot = state.site.snapshot();

    let categories = snapshot
        .grouped()
        .into_iter()
        .map(|(category, pages)| CategoryNav {
            title: category.title.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
            pages: pages
                .into_iter()
                .map(|page| PageLink {
                    title: page.title.clone(),
                    url: page.url.clone(),
                    description: page.description.clone(),
                })
                .collect(),
        })
        .collect();

    Json(NavigationResponse { categories })
}

//! Home page handler

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::domain::ports::ContentSource;
use crate::error::AppError;
use crate::render::render_home;
use crate::AppState;

/// Most feed pages a single request will accumulate
const MAX_PAGES: usize = 50;

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// How many feed pages the reader has loaded so far
    pub pages: Option<usize>,
}

/// GET /
///
/// Renders the accumulated feed. `?pages=N` re-accumulates the first N
/// pages so "Carregar mais posts" stays a plain link; the link is only
/// offered while the feed has a continuation cursor.
pub async fn home<C: ContentSource + 'static>(
    State(state): State<AppState<C>>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>, AppError> {
    let pages = query.pages.unwrap_or(1).clamp(1, MAX_PAGES);

    let cache_key = format!("home:{pages}");
    if let Some(html) = state.cache.get(&cache_key) {
        return Ok(Html(html));
    }

    let feed = state.feed_service.load_pages(pages).await?;
    let html = render_home(&feed, pages);
    state
        .cache
        .put(&cache_key, html.clone(), state.config.list_ttl());

    Ok(Html(html))
}

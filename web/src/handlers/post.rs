//! Post page handler

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::domain::ports::ContentSource;
use crate::error::AppError;
use crate::render::render_post;
use crate::AppState;

/// GET /post/:id
pub async fn post<C: ContentSource + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let cache_key = format!("post:{id}");
    if let Some(html) = state.cache.get(&cache_key) {
        return Ok(Html(html));
    }

    let view = state
        .post_service
        .get_post(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(id.clone()))?;

    tracing::debug!("rendering post {}", view.detail.id);

    let html = render_post(&view);
    state
        .cache
        .put(&cache_key, html.clone(), state.config.post_ttl());

    Ok(Html(html))
}

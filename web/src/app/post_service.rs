//! Post service
//!
//! Assembles everything a post page needs: the document itself, its
//! reading-time estimate and links to neighboring posts.

use std::sync::Arc;

use crate::domain::entities::{PostDetail, PostLink};
use crate::domain::ports::ContentSource;
use crate::domain::reading_time;
use crate::error::AppError;

/// A post ready for rendering
#[derive(Debug, Clone)]
pub struct PostView {
    pub detail: PostDetail,
    pub reading_minutes: u32,
    pub previous: Option<PostLink>,
    pub next: Option<PostLink>,
}

pub struct PostService<C: ContentSource> {
    content: Arc<C>,
}

impl<C: ContentSource> PostService<C> {
    pub fn new(content: Arc<C>) -> Self {
        Self { content }
    }

    /// Fetch a post and its page metadata. `None` when the id is unknown.
    pub async fn get_post(&self, id: &str) -> Result<Option<PostView>, AppError> {
        let Some(detail) = self.content.fetch_post(id).await? else {
            return Ok(None);
        };

        let reading_minutes = reading_time::estimate_minutes(&detail.sections);

        // Both directions use the same after-current-id lookup (open
        // question in DESIGN.md).
        let previous = self.content.fetch_summary_after(id).await?;
        let next = self.content.fetch_summary_after(id).await?;

        Ok(Some(PostView {
            detail,
            reading_minutes,
            previous,
            next,
        }))
    }
}

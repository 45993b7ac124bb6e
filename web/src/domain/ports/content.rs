//! Content source port trait
//!
//! Defines the interface to the headless content API the blog is served
//! from.

use async_trait::async_trait;

use crate::domain::entities::{FeedPage, PostDetail, PostLink};
use crate::error::ContentError;

/// Read-only access to the blog's content
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch one page of post summaries. A `cursor` of `None` requests
    /// the first page; otherwise it must be a cursor previously returned
    /// in [`FeedPage::next_cursor`].
    async fn fetch_page(
        &self,
        page_size: u32,
        cursor: Option<&str>,
    ) -> Result<FeedPage, ContentError>;

    /// Fetch a full post document. `None` when no such post exists.
    async fn fetch_post(&self, id: &str) -> Result<Option<PostDetail>, ContentError>;

    /// Fetch a link to the single post that follows `id` in the source's
    /// ordering, if any.
    async fn fetch_summary_after(&self, id: &str) -> Result<Option<PostLink>, ContentError>;
}

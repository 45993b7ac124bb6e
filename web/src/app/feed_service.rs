//! Feed service
//!
//! Loads the home feed: always the first page, then as many further pages
//! as the reader has asked for, accumulated through [`FeedState`].

use std::sync::Arc;

use crate::domain::entities::FeedState;
use crate::domain::ports::ContentSource;
use crate::error::AppError;

pub struct FeedService<C: ContentSource> {
    content: Arc<C>,
    page_size: u32,
}

impl<C: ContentSource> FeedService<C> {
    pub fn new(content: Arc<C>, page_size: u32) -> Self {
        Self { content, page_size }
    }

    /// Load up to `pages` feed pages, stopping early when the source is
    /// exhausted. `pages` below 1 is treated as 1: the first page is
    /// always fetched.
    ///
    /// A fetch failure propagates as-is; no partially appended state is
    /// ever observable by the caller.
    pub async fn load_pages(&self, pages: usize) -> Result<FeedState, AppError> {
        let first = self.content.fetch_page(self.page_size, None).await?;
        let mut state = FeedState::initialize(first);

        let mut loaded = 1;
        while loaded < pages && state.has_more() {
            let page = match state.cursor() {
                Some(cursor) => self.content.fetch_page(self.page_size, Some(cursor)).await?,
                None => break,
            };
            state = state.append_page(page);
            loaded += 1;
        }

        Ok(state)
    }
}

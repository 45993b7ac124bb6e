//! Mock content source
//!
//! An in-memory `ContentSource` that serves configured pages and
//! documents, and can be told to fail to exercise error paths.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{FeedPage, PostDetail, PostLink};
use crate::domain::ports::ContentSource;
use crate::error::ContentError;

#[derive(Default)]
pub struct InMemoryContentSource {
    front_page: Option<FeedPage>,
    pages: HashMap<String, FeedPage>,
    posts: HashMap<String, PostDetail>,
    after: HashMap<String, PostLink>,
    fail: bool,
}

impl InMemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page served when no cursor is given
    pub fn with_front_page(mut self, page: FeedPage) -> Self {
        self.front_page = Some(page);
        self
    }

    /// Page served for a specific cursor
    pub fn with_page(mut self, cursor: &str, page: FeedPage) -> Self {
        self.pages.insert(cursor.to_string(), page);
        self
    }

    pub fn with_post(mut self, post: PostDetail) -> Self {
        self.posts.insert(post.id.clone(), post);
        self
    }

    /// Link returned by the after-id navigation lookup
    pub fn with_summary_after(mut self, id: &str, link: PostLink) -> Self {
        self.after.insert(id.to_string(), link);
        self
    }

    /// Make every call fail with an upstream error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn check_failure(&self) -> Result<(), ContentError> {
        if self.fail {
            return Err(ContentError::Api {
                status: 502,
                message: "content source unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContentSource for InMemoryContentSource {
    async fn fetch_page(
        &self,
        _page_size: u32,
        cursor: Option<&str>,
    ) -> Result<FeedPage, ContentError> {
        self.check_failure()?;
        let page = match cursor {
            None => self.front_page.clone(),
            Some(cursor) => self.pages.get(cursor).cloned(),
        };
        page.ok_or_else(|| ContentError::Api {
            status: 404,
            message: format!("no page for cursor {cursor:?}"),
        })
    }

    async fn fetch_post(&self, id: &str) -> Result<Option<PostDetail>, ContentError> {
        self.check_failure()?;
        Ok(self.posts.get(id).cloned())
    }

    async fn fetch_summary_after(&self, id: &str) -> Result<Option<PostLink>, ContentError> {
        self.check_failure()?;
        Ok(self.after.get(id).cloned())
    }
}

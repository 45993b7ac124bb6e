//! Feed pagination entities
//!
//! `FeedState` accumulates post summaries across "load more" fetches. The
//! continuation cursor is an opaque token meaningful only to the content
//! source; an absent cursor means the feed is exhausted.

use super::post::PostSummary;

/// One page of results from the content source
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage {
    pub items: Vec<PostSummary>,
    pub next_cursor: Option<String>,
}

/// Accumulated feed across fetched pages
///
/// Items keep their fetch order; pages are never deduplicated, reordered
/// or removed once appended. The cursor is replaced wholesale by each
/// appended page.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    items: Vec<PostSummary>,
    cursor: Option<String>,
}

impl FeedState {
    /// Seed state from the first fetched page. An empty page and an
    /// absent cursor are both valid.
    pub fn initialize(page: FeedPage) -> Self {
        Self {
            items: page.items,
            cursor: page.next_cursor,
        }
    }

    /// Append a fetched page, leaving `self` untouched.
    ///
    /// Performs no exhaustion check: callers decide whether to fetch at
    /// all by consulting `has_more` first.
    pub fn append_page(&self, page: FeedPage) -> Self {
        let mut items = self.items.clone();
        items.extend(page.items);
        Self {
            items,
            cursor: page.next_cursor,
        }
    }

    /// Whether another page can be requested.
    pub fn has_more(&self) -> bool {
        self.cursor.as_deref().map_or(false, |c| !c.is_empty())
    }

    pub fn items(&self) -> &[PostSummary] {
        &self.items
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}

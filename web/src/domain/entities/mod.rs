//! Domain entities
//!
//! Pure domain models, independent of the content API's wire format.

pub mod feed;
pub mod post;

pub use feed::{FeedPage, FeedState};
pub use post::{PostDetail, PostLink, PostSummary, Section};

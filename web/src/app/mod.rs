//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod feed_service;
pub mod post_service;
pub mod render_cache;

pub use feed_service::FeedService;
pub use post_service::{PostService, PostView};
pub use render_cache::RenderCache;

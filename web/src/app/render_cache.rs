//! Render cache
//!
//! In-process cache of rendered HTML with per-route freshness windows:
//! the home page is revalidated daily, post pages every 30 minutes.
//! Expired entries are re-rendered on demand by the handlers.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

struct Entry {
    html: String,
    expires_at: Instant,
}

/// TTL cache keyed by route + query
#[derive(Default)]
pub struct RenderCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh HTML for `key`, if present and unexpired.
    pub fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().expect("render cache lock poisoned");
        entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.html.clone())
    }

    /// Store rendered HTML under `key` for `ttl`. Expired siblings are
    /// dropped on the way in.
    pub fn put(&self, key: &str, html: String, ttl: Duration) {
        let mut entries = self.entries.write().expect("render cache lock poisoned");
        entries.retain(|_, entry| entry.expires_at > Instant::now());
        entries.insert(
            key.to_string(),
            Entry {
                html,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

//! Post domain entities
//!
//! Produced only by the content source adapter; immutable once built.

use chrono::{DateTime, Utc};

/// A post as it appears in the home feed
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    /// Opaque unique identifier assigned by the content source
    pub id: String,
    pub published_at: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// A full post document
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub id: String,
    pub published_at: Option<DateTime<Utc>>,
    pub last_edited_at: Option<DateTime<Utc>>,
    pub title: String,
    pub author: String,
    pub banner_url: String,
    pub sections: Vec<Section>,
}

/// One titled block of body text
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// Minimal reference to a neighboring post, used for navigation links
#[derive(Debug, Clone, PartialEq)]
pub struct PostLink {
    pub id: String,
    pub title: String,
}

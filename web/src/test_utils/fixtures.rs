//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{FeedPage, PostDetail, PostLink, PostSummary, Section};

/// A summary with the given id; title and subtitle derive from it
pub fn test_summary(id: &str) -> PostSummary {
    PostSummary {
        id: id.to_string(),
        published_at: Some(Utc.with_ymd_and_hms(2021, 3, 15, 19, 25, 28).unwrap()),
        title: format!("Post {id}"),
        subtitle: format!("Sobre {id}"),
        author: "Joseph Oliveira".to_string(),
    }
}

/// A feed page holding one summary per id
pub fn test_page(ids: &[&str], next_cursor: Option<&str>) -> FeedPage {
    FeedPage {
        items: ids.iter().map(|id| test_summary(id)).collect(),
        next_cursor: next_cursor.map(str::to_string),
    }
}

pub fn test_section(heading: &str, paragraphs: &[&str]) -> Section {
    Section {
        heading: heading.to_string(),
        paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
    }
}

/// A full post with one short section and a last-edit timestamp
pub fn test_detail(id: &str) -> PostDetail {
    PostDetail {
        id: id.to_string(),
        published_at: Some(Utc.with_ymd_and_hms(2021, 3, 15, 19, 25, 28).unwrap()),
        last_edited_at: Some(Utc.with_ymd_and_hms(2021, 3, 16, 9, 5, 0).unwrap()),
        title: format!("Post {id}"),
        author: "Joseph Oliveira".to_string(),
        banner_url: format!("https://images.example.com/{id}.png"),
        sections: vec![test_section(
            "Introdução",
            &["Tudo sobre como criar a sua primeira aplicação utilizando Create React App"],
        )],
    }
}

pub fn test_link(id: &str) -> PostLink {
    PostLink {
        id: id.to_string(),
        title: format!("Post {id}"),
    }
}

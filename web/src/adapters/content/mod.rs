//! Content API adapter

pub mod client;

pub use client::ContentApiClient;

//! Test utilities
//!
//! Manual in-memory implementation of the content source plus fixture
//! factories. Manual mocks keep the tests explicit: each test states
//! exactly which pages and documents the source will serve.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

//! Unified error types
//!
//! This module defines error types for each layer:
//! - `ContentError`: content API client errors
//! - `AppError`: application layer errors (rendered as HTML error pages)

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render;

/// Content API client errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid access token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Content API error: {0}")]
    Content(#[from] ContentError),

    #[error("Post not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Content(e) => {
                // The prior rendered pages stay cached; a reload retries.
                tracing::error!("Content API error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Não foi possível carregar o conteúdo. Tente novamente.",
                )
            }
            AppError::NotFound(id) => {
                tracing::debug!("Unknown post requested: {}", id);
                (StatusCode::NOT_FOUND, "Post não encontrado.")
            }
        };

        (status, Html(render::error_page(status, message))).into_response()
    }
}

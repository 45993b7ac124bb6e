//! spacetraveling web server
//!
//! Server-rendered front-end for the spacetraveling blog. Posts live in a
//! headless content API; this service lists them, paginates the feed and
//! renders individual post pages with a reading-time estimate.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod render;

#[cfg(test)]
mod test_utils;


use adapters::ContentApiClient;
use app::{FeedService, PostService, RenderCache};
use config::Config;
use domain::ports::ContentSource;

/// Application state shared across all handlers
pub struct AppState<C: ContentSource> {
    pub feed_service: Arc<FeedService<C>>,
    pub post_service: Arc<PostService<C>>,
    pub cache: Arc<RenderCache>,
    pub config: Config,
}

// Derived Clone would demand C: Clone, which the Arcs don't need.
impl<C: ContentSource> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
            post_service: self.post_service.clone(),
            cache: self.cache.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router. Generic over the content source so tests can drive
/// the same routes against an in-memory source.
pub fn router<C: ContentSource + 'static>(state: AppState<C>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(handlers::home::<C>))
        .route("/post/:id", get(handlers::post::<C>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,spacetraveling_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting spacetraveling...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let content = Arc::new(ContentApiClient::new(
        config.content_api_url.clone(),
        config.content_api_token.clone(),
    ));

    // Create application services
    let feed_service = Arc::new(FeedService::new(content.clone(), config.page_size));
    let post_service = Arc::new(PostService::new(content));
    let cache = Arc::new(RenderCache::new());

    let state = AppState {
        feed_service,
        post_service,
        cache,
        config: config.clone(),
    };

    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

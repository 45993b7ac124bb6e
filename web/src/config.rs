use std::env;
use std::time::Duration;

/// Runtime configuration, read once at startup
#[derive(Clone)]
pub struct Config {
    /// Base URL of the headless content API
    pub content_api_url: String,
    /// Optional bearer token for the content API
    pub content_api_token: Option<String>,
    pub port: u16,
    /// Posts fetched per feed page
    pub page_size: u32,
    /// Seconds a rendered home page stays fresh
    pub list_ttl_secs: u64,
    /// Seconds a rendered post page stays fresh
    pub post_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            content_api_url: env::var("CONTENT_API_URL").expect("CONTENT_API_URL must be set"),
            content_api_token: env::var("CONTENT_API_TOKEN").ok(),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2),
            list_ttl_secs: env::var("LIST_TTL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(24 * 60 * 60),
            post_ttl_secs: env::var("POST_TTL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30 * 60),
        }
    }

    pub fn list_ttl(&self) -> Duration {
        Duration::from_secs(self.list_ttl_secs)
    }

    pub fn post_ttl(&self) -> Duration {
        Duration::from_secs(self.post_ttl_secs)
    }
}

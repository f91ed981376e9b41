pub mod api;
pub mod config;
pub mod error;
pub mod scraper;

use std::sync::Arc;
use std::time::Duration;

use config::Config;
use error::{AppError, Result};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

impl AppState {
    /// Build the shared state, including the HTTP client used for all
    /// outbound fetches. The client follows redirects and enforces the
    /// configured total timeout per request.
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.scrape_timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(AppState {
            config: Arc::new(config),
            client,
        })
    }
}

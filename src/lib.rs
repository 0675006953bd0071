pub mod api;
pub mod config;
pub mod error;
pub mod extract;

use std::sync::Arc;
use config::Config;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> reqwest::Result<Self> {
        let client = extract::build_client(config.request_timeout)?;
        Ok(AppState {
            config: Arc::new(config),
            client,
        })
    }
}

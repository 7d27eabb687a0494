//! Long-lived handles shared by every request.

use crate::config::Config;
use crate::trail_search::TrailSearchService;
use reqwest::Client;

/// Application state - configuration plus the outbound trail search client.
pub struct AppState {
    config: Config,
    trail_search: TrailSearchService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .user_agent(concat!("upto-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!("Falling back to default HTTP client: {}", err);
                Client::new()
            });
        Self::with_client(config, client)
    }

    pub fn with_client(config: Config, client: Client) -> Self {
        let trail_search = TrailSearchService::new(client, &config);
        Self {
            config,
            trail_search,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn trail_search(&self) -> &TrailSearchService {
        &self.trail_search
    }
}

//! Server configuration from environment.

use std::env;
use upto_core::DEFAULT_OVERPASS_URL;

/// Origins the web client is served from when `UPTO_CORS_ORIGINS` is unset.
const DEFAULT_CORS_ORIGINS: [&str; 6] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "https://upto-six.vercel.app",
    "https://upto.world",
    "http://172.105.178.48",
    "http://localhost",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Reported by the health check.
    pub server_name: String,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub overpass_url: String,
    pub trail_cache_ttl_s: u64,
    pub trail_cache_max_entries: usize,
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3001),
            server_name: env::var("UPTO_SERVER_NAME").unwrap_or_else(|_| "Linode".to_string()),
            environment: env::var("UPTO_ENV")
                .or_else(|_| env::var("NODE_ENV"))
                .unwrap_or_else(|_| "development".to_string()),
            cors_origins: env::var("UPTO_CORS_ORIGINS")
                .ok()
                .map(|value| parse_list(&value))
                .filter(|origins| !origins.is_empty())
                .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()),
            overpass_url: env::var("OVERPASS_URL")
                .unwrap_or_else(|_| DEFAULT_OVERPASS_URL.to_string()),
            trail_cache_ttl_s: env::var("UPTO_TRAIL_CACHE_TTL_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(600),
            trail_cache_max_entries: env::var("UPTO_TRAIL_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(256),
            log_json: env::var("UPTO_LOG_JSON")
                .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_list_ignores_blanks() {
        assert_eq!(
            parse_list(" https://upto.world, ,http://localhost:5173 "),
            vec!["https://upto.world", "http://localhost:5173"]
        );
    }
}

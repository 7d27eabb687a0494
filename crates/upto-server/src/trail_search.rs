//! Trail search against the Overpass API with a short-lived result cache.

use crate::cache::{prune_cache, CacheEntry};
use crate::config::Config;
use chrono::Utc;
use dashmap::DashMap;
use reqwest::{header, Client, StatusCode};
use std::time::{Duration, Instant};
use thiserror::Error;
use upto_core::overpass::{build_overpass_query, process_osm_results, OverpassResponse};
use upto_core::trails::{consolidate_and_rank, RouteQuery, TrailSuggestion, REQUEST_TIMEOUT};

#[derive(Debug, Error)]
pub enum TrailSearchError {
    #[error("Overpass request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Overpass returned HTTP {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone)]
struct CachedSearch {
    fetched_at: Instant,
    suggestions: Vec<TrailSuggestion>,
}

impl CacheEntry for CachedSearch {
    fn fetched_at(&self) -> Instant {
        self.fetched_at
    }
}

pub struct TrailSearchService {
    client: Client,
    overpass_url: String,
    cache: DashMap<String, CachedSearch>,
    cache_ttl: Duration,
    cache_max_entries: usize,
}

impl TrailSearchService {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            overpass_url: config.overpass_url.clone(),
            cache: DashMap::new(),
            cache_ttl: Duration::from_secs(config.trail_cache_ttl_s),
            cache_max_entries: config.trail_cache_max_entries.max(1),
        }
    }

    /// Ranked suggestions for a query, served from cache while fresh.
    pub async fn search(
        &self,
        query: &RouteQuery,
    ) -> Result<Vec<TrailSuggestion>, TrailSearchError> {
        let key = cache_key(query);
        if let Some(entry) = self.cache.get(&key) {
            if entry.fetched_at.elapsed() <= self.cache_ttl {
                tracing::debug!("Trail search cache hit for {}", key);
                return Ok(entry.suggestions.clone());
            }
        }

        let response = self.fetch_overpass(query).await?;
        let suggestions = consolidate_and_rank(process_osm_results(&response, query, Utc::now()));
        tracing::info!(
            "Overpass returned {} elements, {} suggestions for '{}'",
            response.elements.len(),
            suggestions.len(),
            query.title
        );

        self.cache.insert(
            key,
            CachedSearch {
                fetched_at: Instant::now(),
                suggestions: suggestions.clone(),
            },
        );
        prune_cache(&self.cache, self.cache_max_entries, self.cache_ttl);

        Ok(suggestions)
    }

    async fn fetch_overpass(
        &self,
        query: &RouteQuery,
    ) -> Result<OverpassResponse, TrailSearchError> {
        let response = self
            .client
            .post(&self.overpass_url)
            .header(header::CONTENT_TYPE, "text/plain")
            .body(build_overpass_query(query))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TrailSearchError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }
}

fn cache_key(query: &RouteQuery) -> String {
    format!(
        "{}|{}|{}",
        query.title.trim().to_lowercase(),
        query.activity_type,
        query.location.as_deref().unwrap_or("").trim().to_lowercase()
    )
}

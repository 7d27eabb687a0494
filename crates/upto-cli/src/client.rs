//! HTTP client for the upto server API.

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use upto_core::{PaceFactors, RouteData, RouteEstimate, TrailSuggestion};

/// Body of `GET /api/trails/search`.
#[derive(Debug, Deserialize)]
pub struct TrailSearchResults {
    pub suggestions: Vec<TrailSuggestion>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateRequest<'a> {
    route: &'a RouteData,
    pace_factors: &'a PaceFactors,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct UptoClient {
    client: Client,
    base_url: String,
}

impl UptoClient {
    /// * `base_url` - Server root (e.g., "http://localhost:3001")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn search_trails(
        &self,
        title: &str,
        activity_type: &str,
        location: Option<&str>,
    ) -> Result<TrailSearchResults> {
        let mut params = vec![("title", title), ("type", activity_type)];
        if let Some(location) = location {
            params.push(("location", location));
        }

        let url = format!("{}/api/trails/search", self.base_url);
        tracing::debug!("GET {} {:?}", url, params);
        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        read_json(response).await
    }

    pub async fn estimate(
        &self,
        route: &RouteData,
        pace_factors: &PaceFactors,
    ) -> Result<RouteEstimate> {
        let url = format!("{}/api/guidepace/estimate", self.base_url);
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(&EstimateRequest { route, pace_factors })
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        read_json(response).await
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        bail!("Server returned {}: {}", status, message);
    }
    response.json().await.context("Failed to parse server response")
}

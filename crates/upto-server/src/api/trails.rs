//! Trail search endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use upto_core::{RouteQuery, TrailSuggestion};

use crate::api::request_id::RequestId;
use crate::api::ApiError;
use crate::state::AppState;

const DEFAULT_ACTIVITY: &str = "hiking";

#[derive(Debug, Deserialize)]
pub struct TrailSearchParams {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrailSearchResponse {
    pub suggestions: Vec<TrailSuggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TrailSearchParams {
    fn into_query(self) -> Result<RouteQuery, ApiError> {
        let title = self
            .title
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .ok_or_else(|| ApiError::bad_request("title", "is required"))?;

        Ok(RouteQuery {
            title,
            activity_type: non_blank(self.activity_type)
                .unwrap_or_else(|| DEFAULT_ACTIVITY.to_string()),
            location: non_blank(self.location),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Ranked trail suggestions. Upstream failures degrade to an empty list.
pub async fn search_trails(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    params: Result<Query<TrailSearchParams>, QueryRejection>,
) -> Result<Json<TrailSearchResponse>, ApiError> {
    let Query(params) = params?;
    let query = params.into_query()?;

    let response = match state.trail_search().search(&query).await {
        Ok(suggestions) if suggestions.is_empty() => TrailSearchResponse {
            suggestions,
            message: Some(format!("No trails matched '{}'", query.title)),
        },
        Ok(suggestions) => TrailSearchResponse {
            suggestions,
            message: None,
        },
        Err(err) => {
            tracing::warn!(
                "Trail search for '{}' failed (request {}): {}",
                query.title,
                request_id,
                err
            );
            TrailSearchResponse {
                suggestions: Vec::new(),
                message: Some(format!(
                    "Trail search is temporarily unavailable (request {})",
                    request_id
                )),
            }
        }
    };

    Ok(Json(response))
}

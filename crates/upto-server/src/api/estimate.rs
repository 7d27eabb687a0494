//! GuidePace estimate endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    Json,
};
use serde::Deserialize;
use upto_core::{
    analyze_route, demo_route, estimate_route, safety_recommendations, PaceFactors, RouteData,
    RouteEstimate, RouteSegment, SafetyRecommendations, Season,
};

use crate::api::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub route: RouteData,
    #[serde(default)]
    pub pace_factors: PaceFactors,
}

/// Full estimate: validated segments, totals, safety guidance.
pub async fn estimate(
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<RouteEstimate>, ApiError> {
    let Json(req) = payload?;
    let estimate = estimate_route(&req.route, &req.pace_factors)?;
    tracing::info!(
        "Estimated {:?} route: {} segments, {:.2}h",
        estimate.regime,
        estimate.segments.len(),
        estimate.total_hours
    );
    Ok(Json(estimate))
}

/// Segment breakdown only, without input validation.
pub async fn analyze(
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<Vec<RouteSegment>>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(analyze_route(&req.route, &req.pace_factors)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyQuery {
    pub total_hours: f64,
    #[serde(default)]
    pub season: Season,
}

pub async fn safety(
    query: Result<Query<SafetyQuery>, QueryRejection>,
) -> Result<Json<SafetyRecommendations>, ApiError> {
    let Query(query) = query?;
    if !query.total_hours.is_finite() || query.total_hours < 0.0 {
        return Err(ApiError::bad_request(
            "totalHours",
            "must be a non-negative number",
        ));
    }
    Ok(Json(safety_recommendations(query.total_hours, query.season)))
}

/// Estimate for the built-in demo climb with neutral pace factors.
pub async fn demo() -> Result<Json<RouteEstimate>, ApiError> {
    Ok(Json(estimate_route(&demo_route(), &PaceFactors::default())?))
}

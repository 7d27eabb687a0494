//! Complete GuidePace estimate for one route.

use crate::error::EstimateError;
use crate::format::{format_duration, format_time_range};
use crate::models::{RouteData, RouteSegment, SafetyLevel, SafetyRecommendations, Season};
use crate::pace::PaceFactors;
use crate::route_analyzer::{analyze_route, classify_route, total_time, RouteRegime};
use crate::time_calculator::safety_recommendations;
use crate::validation::{validate_pace_factors, validate_route};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEstimate {
    pub regime: RouteRegime,
    pub segments: Vec<RouteSegment>,
    /// Sum of realistic segment times, in hours
    pub total_hours: f64,
    /// e.g. "6h 2min"
    pub total_display: String,
    /// e.g. "5h 7min - 7h 32min"
    pub range_display: String,
    pub season: Season,
    pub safety: SafetyRecommendations,
    pub safety_level: SafetyLevel,
    pub pace_factors: PaceFactors,
    /// Non-fatal remarks about the input (e.g. unusual pace factors)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

/// Validate, segment, total and derive safety guidance in one call.
pub fn estimate_route(
    route: &RouteData,
    factors: &PaceFactors,
) -> Result<RouteEstimate, EstimateError> {
    validate_route(route)?;
    validate_pace_factors(factors)?;

    let segments = analyze_route(route, factors);
    let total_hours = total_time(&segments);
    let season = route.season_or_default();
    let safety = safety_recommendations(total_hours, season);
    let safety_level = safety.level();

    Ok(RouteEstimate {
        regime: classify_route(route),
        segments,
        total_hours,
        total_display: format_duration(total_hours),
        range_display: format_time_range(total_hours),
        season,
        safety,
        safety_level,
        pace_factors: *factors,
        notices: factors
            .out_of_range()
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

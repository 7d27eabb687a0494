//! Trail suggestion scoring and ranking.
//!
//! Candidates from any trail source are scored against the user's query with
//! a Levenshtein name similarity, activity match and location similarity,
//! then de-duplicated and cut to the best few.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Suggestions at or below this confidence are dropped.
pub const CONFIDENCE_THRESHOLD: f64 = 0.7;
pub const MAX_SUGGESTIONS: usize = 5;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(25);

/// Weights added to the confidence score per matching factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceWeights {
    pub exact_name_match: f64,
    pub partial_name_match: f64,
    pub activity_type_match: f64,
    pub location_proximity: f64,
    pub difficulty_similarity: f64,
    pub distance_similarity: f64,
}

pub const CONFIDENCE_WEIGHTS: ConfidenceWeights = ConfidenceWeights {
    exact_name_match: 0.9,
    partial_name_match: 0.6,
    activity_type_match: 0.8,
    location_proximity: 0.7,
    difficulty_similarity: 0.5,
    distance_similarity: 0.4,
};

/// Name similarity above which a name counts as an exact match.
const EXACT_NAME_SCORE: f64 = 0.8;
/// Name similarity above which a name counts as a partial match.
const PARTIAL_NAME_SCORE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailSource {
    Osm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailLocation {
    pub name: String,
    /// [lat, lon]
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailWaypoint {
    pub name: String,
    /// [lat, lon]
    pub coordinates: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailMetadata {
    pub verified: bool,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A ranked trail match shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailSuggestion {
    pub id: String,
    pub name: String,
    pub source: TrailSource,
    pub confidence: f64,
    pub activity_type: String,
    pub location: TrailLocation,
    /// Kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<TrailWaypoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TrailMetadata>,
}

/// What the user typed when asking for trail suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuery {
    pub title: String,
    pub activity_type: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// The parts of a candidate trail the confidence score looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailCandidate<'a> {
    pub name: Option<&'a str>,
    pub activity_type: Option<&'a str>,
    pub location_name: Option<&'a str>,
}

impl<'a> From<&'a TrailSuggestion> for TrailCandidate<'a> {
    fn from(suggestion: &'a TrailSuggestion) -> Self {
        Self {
            name: Some(suggestion.name.as_str()),
            activity_type: Some(suggestion.activity_type.as_str()),
            location_name: Some(suggestion.location.name.as_str()),
        }
    }
}

/// Similarity in [0, 1]: `(len(longer) - levenshtein) / len(longer)`.
///
/// Two empty strings are identical.
pub fn fuzzy_match(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = strsim::levenshtein(a, b);
    (longest - distance) as f64 / longest as f64
}

/// Average of the matched factor weights for one candidate.
pub fn calculate_confidence(query: &RouteQuery, candidate: &TrailCandidate<'_>) -> f64 {
    let weights = &CONFIDENCE_WEIGHTS;
    let mut score = 0.0;
    let mut factor_count = 0u32;

    if let Some(name) = candidate.name.filter(|_| !query.title.is_empty()) {
        let name_score = fuzzy_match(&query.title.to_lowercase(), &name.to_lowercase());
        if name_score > EXACT_NAME_SCORE {
            score += weights.exact_name_match;
        } else if name_score > PARTIAL_NAME_SCORE {
            score += weights.partial_name_match;
        }
        factor_count += 1;
    }

    if candidate.activity_type == Some(query.activity_type.as_str()) {
        score += weights.activity_type_match;
    }
    factor_count += 1;

    if let (Some(location), Some(candidate_location)) = (
        query.location.as_deref().filter(|l| !l.is_empty()),
        candidate.location_name,
    ) {
        let proximity = fuzzy_match(&location.to_lowercase(), &candidate_location.to_lowercase());
        score += proximity * weights.location_proximity;
        factor_count += 1;
    }

    score / f64::from(factor_count)
}

/// Drop repeated trails with the same name and coordinates; first one wins.
pub fn remove_duplicates(suggestions: Vec<TrailSuggestion>) -> Vec<TrailSuggestion> {
    let mut seen = HashSet::new();
    suggestions
        .into_iter()
        .filter(|suggestion| {
            let [lat, lon] = suggestion.location.coordinates;
            seen.insert(format!("{}-{},{}", suggestion.name, lat, lon))
        })
        .collect()
}

/// De-duplicate, order by confidence (highest first) and keep the top few.
pub fn consolidate_and_rank(suggestions: Vec<TrailSuggestion>) -> Vec<TrailSuggestion> {
    let mut ranked = remove_duplicates(suggestions);
    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    ranked.truncate(MAX_SUGGESTIONS);
    ranked
}

//! Core data models for GuidePace route analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity declared for a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    #[default]
    Hiking,
    Climbing,
    Skiing,
    Other,
}

/// Season used for terrain and daylight assumptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    #[default]
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Approximate usable daylight in hours.
    pub fn daylight_hours(self) -> f64 {
        match self {
            Season::Spring => 12.0,
            Season::Summer => 14.0,
            Season::Fall => 10.0,
            Season::Winter => 8.0,
        }
    }
}

/// Route description supplied to a single analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteData {
    /// Total distance in kilometers
    pub distance: f64,
    /// Total elevation gain in meters
    pub elevation_gain: f64,
    /// Total elevation loss in meters (0 means unknown)
    #[serde(default)]
    pub elevation_loss: f64,
    pub activity_type: ActivityType,
    /// Free-form grade such as "5.7" or "5.10a"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climbing_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_pitches: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
}

impl RouteData {
    /// Average grade as a decimal (rise over run).
    pub fn average_grade(&self) -> f64 {
        self.elevation_gain / (self.distance * 1000.0)
    }

    pub fn season_or_default(&self) -> Season {
        self.season.unwrap_or_default()
    }

    /// Pitch count, treating an explicit zero as absent.
    pub fn pitches(&self) -> Option<u32> {
        self.number_of_pitches.filter(|pitches| *pitches > 0)
    }

    /// Grade string, treating an empty string as absent.
    pub fn grade(&self) -> Option<&str> {
        self.climbing_grade.as_deref().filter(|grade| !grade.is_empty())
    }
}

/// Which formula family a segment was timed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentTerrain {
    Munter,
    Chauvin,
    Technical,
}

/// Terrain handled by the Munter method (class 1-2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MunterTerrain {
    Uphill,
    Flat,
    Downhill,
    Bushwhacking,
    Skiing,
}

/// Terrain handled by the Chauvin system (class 3-4 and snow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChauvinDifficulty {
    Class3Easy,
    Class3Hard,
    Class4Easy,
    Class4Hard,
    SnowModerate,
    SnowSteep,
}

impl ChauvinDifficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            ChauvinDifficulty::Class3Easy => "class3_easy",
            ChauvinDifficulty::Class3Hard => "class3_hard",
            ChauvinDifficulty::Class4Easy => "class4_easy",
            ChauvinDifficulty::Class4Hard => "class4_hard",
            ChauvinDifficulty::SnowModerate => "snow_moderate",
            ChauvinDifficulty::SnowSteep => "snow_steep",
        }
    }
}

impl fmt::Display for ChauvinDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Yosemite Decimal System buckets for roped climbing (class 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TechnicalGrade {
    #[serde(rename = "5.0-5.4")]
    Easy,
    #[serde(rename = "5.5-5.7")]
    Moderate,
    #[serde(rename = "5.8-5.9")]
    Intermediate,
    #[serde(rename = "5.10-5.11")]
    Hard,
    #[serde(rename = "5.12+")]
    Elite,
}

impl TechnicalGrade {
    pub fn as_str(self) -> &'static str {
        match self {
            TechnicalGrade::Easy => "5.0-5.4",
            TechnicalGrade::Moderate => "5.5-5.7",
            TechnicalGrade::Intermediate => "5.8-5.9",
            TechnicalGrade::Hard => "5.10-5.11",
            TechnicalGrade::Elite => "5.12+",
        }
    }
}

impl fmt::Display for TechnicalGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named pace formula; the display names are part of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimationMethod {
    #[serde(rename = "Munter Method")]
    Munter,
    #[serde(rename = "Chauvin System")]
    Chauvin,
    #[serde(rename = "Technical System")]
    Technical,
}

impl EstimationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            EstimationMethod::Munter => "Munter Method",
            EstimationMethod::Chauvin => "Chauvin System",
            EstimationMethod::Technical => "Technical System",
        }
    }
}

impl fmt::Display for EstimationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time band produced by one formula, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    pub optimistic: f64,
    pub realistic: f64,
    pub conservative: f64,
    pub method: EstimationMethod,
}

/// One timed piece of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    pub id: String,
    pub name: String,
    pub terrain_type: SegmentTerrain,
    /// Kilometers
    pub distance: f64,
    /// Meters, absolute value
    pub elevation_gain: f64,
    /// Meters, absolute value
    pub elevation_loss: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitches: Option<u32>,
    /// Realistic estimate in hours
    pub estimated_time: f64,
    pub calculation_method: EstimationMethod,
    pub details: String,
}

/// Start-time and daylight guidance for a planned outing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRecommendations {
    pub recommended_start_time: String,
    pub latest_start_time: String,
    /// Elapsed time at which the party should turn around
    pub turnaround_time: String,
    /// Hours of daylight left after the route and buffer (negative = short)
    pub daylight_margin: f64,
    pub warnings: Vec<String>,
}

/// Overall severity of a set of safety warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Ok,
    Caution,
    Danger,
}

//! Terrain classification and route segmentation.
//!
//! A route is classified into one of three regimes and split into fixed
//! shares of its distance and elevation. Each share is timed with the
//! formula matching its terrain.

use crate::models::{
    ActivityType, ChauvinDifficulty, MunterTerrain, RouteData, RouteSegment, Season,
    SegmentTerrain, TechnicalGrade,
};
use crate::pace::PaceFactors;
use crate::time_calculator::{chauvin_system, munter_method, technical_system};
use serde::{Deserialize, Serialize};

/// Share of a route's distance and elevation assigned to one segment.
///
/// For descent segments `elevation` is the share of the gain used as the
/// elevation loss when the route does not state one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSplit {
    pub distance: f64,
    pub elevation: f64,
}

impl SegmentSplit {
    const fn new(distance: f64, elevation: f64) -> Self {
        Self {
            distance,
            elevation,
        }
    }
}

pub const TECHNICAL_APPROACH: SegmentSplit = SegmentSplit::new(0.3, 0.3);
pub const TECHNICAL_CLIMB: SegmentSplit = SegmentSplit::new(0.4, 0.4);
pub const TECHNICAL_DESCENT: SegmentSplit = SegmentSplit::new(0.3, 0.7);

pub const SCRAMBLING_APPROACH: SegmentSplit = SegmentSplit::new(0.4, 0.3);
pub const SCRAMBLING_SECTION: SegmentSplit = SegmentSplit::new(0.4, 0.6);
pub const SCRAMBLING_DESCENT: SegmentSplit = SegmentSplit::new(0.2, 0.9);

pub const HIKING_ASCENT: SegmentSplit = SegmentSplit::new(0.6, 1.0);
pub const HIKING_DESCENT: SegmentSplit = SegmentSplit::new(0.4, 0.8);

/// Average grade above which a route counts as scrambling.
pub const SCRAMBLING_MIN_GRADE: f64 = 0.25;
/// Minimum gain in meters (~1000 ft) for a scrambling route.
pub const SCRAMBLING_MIN_GAIN_M: f64 = 300.0;

/// Terrain regime a route is analyzed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteRegime {
    Technical,
    Scrambling,
    Hiking,
}

/// Result of reading a climbing grade string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimbingGrade {
    pub difficulty: TechnicalGrade,
    pub is_class5: bool,
}

/// Classify a route. First match wins: technical, scrambling, hiking.
pub fn classify_route(route: &RouteData) -> RouteRegime {
    if technical_climb(route).is_some() {
        RouteRegime::Technical
    } else if has_scrambling(route) {
        RouteRegime::Scrambling
    } else {
        RouteRegime::Hiking
    }
}

/// Break a route into timed segments.
pub fn analyze_route(route: &RouteData, factors: &PaceFactors) -> Vec<RouteSegment> {
    if let Some((grade, pitches)) = technical_climb(route) {
        return analyze_technical_route(route, grade, pitches, factors);
    }
    if has_scrambling(route) {
        return analyze_scrambling_route(route, factors);
    }
    analyze_hiking_route(route, factors)
}

/// Sum of the realistic segment times, in hours.
pub fn total_time(segments: &[RouteSegment]) -> f64 {
    segments.iter().map(|segment| segment.estimated_time).sum()
}

/// Grade string and pitch count when the route is a roped class 5 climb.
fn technical_climb(route: &RouteData) -> Option<(&str, u32)> {
    if route.activity_type != ActivityType::Climbing {
        return None;
    }
    let grade = route.grade()?;
    let pitches = route.pitches()?;
    parse_climbing_grade(grade)
        .is_class5
        .then_some((grade, pitches))
}

fn has_scrambling(route: &RouteData) -> bool {
    route.average_grade() > SCRAMBLING_MIN_GRADE && route.elevation_gain > SCRAMBLING_MIN_GAIN_M
}

fn analyze_technical_route(
    route: &RouteData,
    grade: &str,
    pitches: u32,
    factors: &PaceFactors,
) -> Vec<RouteSegment> {
    let mut segments = Vec::with_capacity(3);
    let grade_info = parse_climbing_grade(grade);

    let approach_distance = route.distance * TECHNICAL_APPROACH.distance;
    let approach_elevation = route.elevation_gain * TECHNICAL_APPROACH.elevation;
    if approach_distance > 0.0 || approach_elevation > 0.0 {
        segments.push(approach_segment(approach_distance, approach_elevation, factors));
    }

    let climb = technical_system(pitches, grade_info.difficulty, factors);
    segments.push(RouteSegment {
        id: "technical".to_string(),
        name: "Technical Climbing".to_string(),
        terrain_type: SegmentTerrain::Technical,
        distance: route.distance * TECHNICAL_CLIMB.distance,
        elevation_gain: route.elevation_gain * TECHNICAL_CLIMB.elevation,
        elevation_loss: 0.0,
        difficulty: Some(grade.to_string()),
        pitches: Some(pitches),
        estimated_time: climb.realistic,
        calculation_method: climb.method,
        details: format!("{} pitches, {}", pitches, grade),
    });

    segments.push(descent_segment(
        "descent",
        "Descent",
        route,
        TECHNICAL_DESCENT,
        MunterTerrain::Downhill,
        factors,
    ));

    segments
}

fn analyze_scrambling_route(route: &RouteData, factors: &PaceFactors) -> Vec<RouteSegment> {
    let mut segments = Vec::with_capacity(3);

    let approach_distance = route.distance * SCRAMBLING_APPROACH.distance;
    let approach_elevation = route.elevation_gain * SCRAMBLING_APPROACH.elevation;
    if approach_distance > 0.0 || approach_elevation > 0.0 {
        segments.push(approach_segment(approach_distance, approach_elevation, factors));
    }

    let scramble_distance = route.distance * SCRAMBLING_SECTION.distance;
    let scramble_elevation = route.elevation_gain * SCRAMBLING_SECTION.elevation;
    let difficulty = estimate_scrambling_difficulty(route);
    let scramble = chauvin_system(scramble_distance, scramble_elevation, difficulty, factors);
    segments.push(RouteSegment {
        id: "scrambling".to_string(),
        name: "Scrambling/Technical Terrain".to_string(),
        terrain_type: SegmentTerrain::Chauvin,
        distance: scramble_distance,
        elevation_gain: scramble_elevation,
        elevation_loss: 0.0,
        difficulty: Some(difficulty.to_string()),
        pitches: None,
        estimated_time: scramble.realistic,
        calculation_method: scramble.method,
        details: format!(
            "{}, {}",
            gain_details(scramble_distance, scramble_elevation),
            difficulty.as_str().replacen('_', " ", 1)
        ),
    });

    segments.push(descent_segment(
        "descent",
        "Descent",
        route,
        SCRAMBLING_DESCENT,
        MunterTerrain::Downhill,
        factors,
    ));

    segments
}

fn analyze_hiking_route(route: &RouteData, factors: &PaceFactors) -> Vec<RouteSegment> {
    let mut segments = Vec::with_capacity(2);
    let (ascent_name, ascent_terrain, descent_name, descent_terrain) =
        if route.activity_type == ActivityType::Skiing {
            (
                "Ascent (Skiing)",
                MunterTerrain::Skiing,
                "Descent (Skiing)",
                MunterTerrain::Skiing,
            )
        } else {
            (
                "Uphill Hiking",
                MunterTerrain::Uphill,
                "Descent/Return",
                MunterTerrain::Downhill,
            )
        };

    if route.elevation_gain > 0.0 {
        let distance = route.distance * HIKING_ASCENT.distance;
        let elevation = route.elevation_gain * HIKING_ASCENT.elevation;
        let estimate = munter_method(distance, elevation, ascent_terrain, factors);
        segments.push(RouteSegment {
            id: "uphill".to_string(),
            name: ascent_name.to_string(),
            terrain_type: SegmentTerrain::Munter,
            distance,
            elevation_gain: elevation,
            elevation_loss: 0.0,
            difficulty: None,
            pitches: None,
            estimated_time: estimate.realistic,
            calculation_method: estimate.method,
            details: gain_details(distance, elevation),
        });
    }

    if route.distance * HIKING_DESCENT.distance > 0.0 {
        segments.push(descent_segment(
            "downhill",
            descent_name,
            route,
            HIKING_DESCENT,
            descent_terrain,
            factors,
        ));
    }

    segments
}

fn approach_segment(distance: f64, elevation: f64, factors: &PaceFactors) -> RouteSegment {
    let estimate = munter_method(distance, elevation, MunterTerrain::Uphill, factors);
    RouteSegment {
        id: "approach".to_string(),
        name: "Approach Hike".to_string(),
        terrain_type: SegmentTerrain::Munter,
        distance,
        elevation_gain: elevation,
        elevation_loss: 0.0,
        difficulty: None,
        pitches: None,
        estimated_time: estimate.realistic,
        calculation_method: estimate.method,
        details: gain_details(distance, elevation),
    }
}

/// Descents are timed on distance alone; losing height barely slows walkers.
fn descent_segment(
    id: &str,
    name: &str,
    route: &RouteData,
    split: SegmentSplit,
    terrain: MunterTerrain,
    factors: &PaceFactors,
) -> RouteSegment {
    let distance = route.distance * split.distance;
    let loss = stated_loss_or(route, split.elevation);
    let estimate = munter_method(distance, 0.0, terrain, factors);
    RouteSegment {
        id: id.to_string(),
        name: name.to_string(),
        terrain_type: SegmentTerrain::Munter,
        distance,
        elevation_gain: 0.0,
        elevation_loss: loss,
        difficulty: None,
        pitches: None,
        estimated_time: estimate.realistic,
        calculation_method: estimate.method,
        details: format!("{:.1} km, -{}m", distance, round_m(loss)),
    }
}

/// The route's stated loss, or a share of the gain when it is zero/unknown.
fn stated_loss_or(route: &RouteData, gain_share: f64) -> f64 {
    if route.elevation_loss != 0.0 && !route.elevation_loss.is_nan() {
        route.elevation_loss
    } else {
        route.elevation_gain * gain_share
    }
}

fn gain_details(distance: f64, elevation: f64) -> String {
    format!("{:.1} km, +{}m", distance, round_m(elevation))
}

fn round_m(meters: f64) -> i64 {
    meters.round() as i64
}

/// Bucket a Yosemite Decimal grade ("5.7", "5.10a", ...).
///
/// Only the numeric part after "5." is read, so letter suffixes are
/// ignored. Grades without the "5." prefix are not class 5.
pub fn parse_climbing_grade(grade: &str) -> ClimbingGrade {
    let Some(rest) = grade.strip_prefix("5.") else {
        return ClimbingGrade {
            difficulty: TechnicalGrade::Easy,
            is_class5: false,
        };
    };

    let numeric = leading_number(rest);
    let difficulty = if numeric <= 4.0 {
        TechnicalGrade::Easy
    } else if numeric <= 7.0 {
        TechnicalGrade::Moderate
    } else if numeric <= 9.0 {
        TechnicalGrade::Intermediate
    } else if numeric <= 11.0 {
        TechnicalGrade::Hard
    } else {
        // also reached when no number could be read
        TechnicalGrade::Elite
    };

    ClimbingGrade {
        difficulty,
        is_class5: true,
    }
}

/// Longest numeric prefix of `text` (after leading whitespace), NaN if none.
pub(crate) fn leading_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > end + 1 || has_digits {
            has_digits = has_digits || frac_end > end + 1;
            end = frac_end;
        }
    }
    if !has_digits {
        return f64::NAN;
    }
    text[..end].parse().unwrap_or(f64::NAN)
}

/// Scrambling difficulty from average grade and season.
pub fn estimate_scrambling_difficulty(route: &RouteData) -> ChauvinDifficulty {
    let grade = route.average_grade();

    if route.season == Some(Season::Winter) {
        return if grade > 0.4 {
            ChauvinDifficulty::SnowSteep
        } else {
            ChauvinDifficulty::SnowModerate
        };
    }

    if grade > 0.5 {
        ChauvinDifficulty::Class4Hard
    } else if grade > 0.35 {
        ChauvinDifficulty::Class4Easy
    } else if grade > 0.3 {
        ChauvinDifficulty::Class3Hard
    } else {
        ChauvinDifficulty::Class3Easy
    }
}

/// Sample multi-pitch route used when a caller has no route of its own.
pub fn demo_route() -> RouteData {
    RouteData {
        distance: 5.0,
        elevation_gain: 1200.0,
        elevation_loss: 1200.0,
        activity_type: ActivityType::Climbing,
        climbing_grade: Some("5.7".to_string()),
        number_of_pitches: Some(6),
        route_description: Some("Multi-pitch granite route with approach hike".to_string()),
        season: Some(Season::Summer),
    }
}

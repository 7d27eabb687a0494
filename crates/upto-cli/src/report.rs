//! Plain-text rendering of estimates and trail suggestions.

use std::fmt::Write;
use upto_core::{format_duration, RouteEstimate, SafetyLevel, TrailSuggestion};

pub fn render_estimate(estimate: &RouteEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Route type: {:?}", estimate.regime);
    let _ = writeln!(out, "Season: {:?}", estimate.season);
    let _ = writeln!(out);

    for segment in &estimate.segments {
        let _ = writeln!(
            out,
            "  {:<30} {:>14}  {} ({})",
            segment.name,
            format_duration(segment.estimated_time),
            segment.details,
            segment.calculation_method
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total: {}", estimate.total_display);
    let _ = writeln!(out, "Range: {}", estimate.range_display);
    let _ = writeln!(out);

    let safety = &estimate.safety;
    let _ = writeln!(out, "Safety: {}", level_label(estimate.safety_level));
    let _ = writeln!(out, "  Recommended start: {}", safety.recommended_start_time);
    let _ = writeln!(out, "  Latest start:      {}", safety.latest_start_time);
    let _ = writeln!(out, "  Turnaround after:  {}", safety.turnaround_time);
    for warning in &safety.warnings {
        let _ = writeln!(out, "  {}", warning);
    }

    let labels = estimate.pace_factors.labels();
    let _ = writeln!(out);
    let _ = writeln!(out, "Pace factors:");
    for (kind, label) in labels {
        let _ = writeln!(
            out,
            "  {:<12} {:.2} ({})",
            kind.as_str(),
            estimate.pace_factors.get(kind),
            label
        );
    }
    for notice in &estimate.notices {
        let _ = writeln!(out, "Note: {}", notice);
    }

    out
}

fn level_label(level: SafetyLevel) -> &'static str {
    match level {
        SafetyLevel::Ok => "OK",
        SafetyLevel::Caution => "CAUTION",
        SafetyLevel::Danger => "DANGER",
    }
}

pub fn render_suggestions(suggestions: &[TrailSuggestion]) -> String {
    let mut out = String::new();
    for (index, trail) in suggestions.iter().enumerate() {
        let [lat, lon] = trail.location.coordinates;
        let _ = write!(
            out,
            "{}. {} [{:.0}%] {:.5}, {:.5}",
            index + 1,
            trail.name,
            trail.confidence * 100.0,
            lat,
            lon
        );
        if let Some(distance) = trail.distance {
            let _ = write!(out, ", {:.1} km", distance);
        }
        if let Some(difficulty) = &trail.difficulty {
            let _ = write!(out, ", {}", difficulty);
        }
        let _ = writeln!(out);
    }
    out
}

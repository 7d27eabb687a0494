//! Mountain guide pace formulas.
//!
//! Three independent models, each turning terrain figures into a
//! [`TimeEstimate`]:
//!
//! - Munter method for class 1-2 travel and skiing:
//!   `(km + gain / 100) / rate`
//! - Chauvin system for scrambling and snow, in 60 m pitch equivalents:
//!   `(km * 1000 + gain) / 60 * minutes / 60`
//! - Technical system for roped climbing: `pitches * minutes / 60`
//!
//! The base time is multiplied by [`PaceFactors::combined`] to give the
//! realistic value, then scaled by a per-method band. None of these
//! functions validate their input; see [`crate::validation`].

use crate::format::format_clock;
use crate::models::{
    ChauvinDifficulty, EstimationMethod, MunterTerrain, SafetyLevel, SafetyRecommendations,
    Season, TechnicalGrade, TimeEstimate,
};
use crate::pace::PaceFactors;

/// Optimistic/conservative multipliers per method.
pub const MUNTER_BAND: (f64, f64) = (0.85, 1.25);
pub const CHAUVIN_BAND: (f64, f64) = (0.8, 1.3);
pub const TECHNICAL_BAND: (f64, f64) = (0.75, 1.4);

/// Meters per pitch equivalent in the Chauvin system.
pub const CHAUVIN_PITCH_M: f64 = 60.0;

/// Hours of daylight kept in reserve.
pub const DAYLIGHT_BUFFER_HOURS: f64 = 2.0;
/// Earliest recommended start, as an hour of the day.
pub const EARLIEST_START_HOUR: f64 = 5.0;
/// Share of the total time spent before turning around.
pub const TURNAROUND_FRACTION: f64 = 0.6;

pub const HEADLAMP_WARNING: &str = "⚠️ Route may require headlamp/early start";
pub const EXCEEDS_DAYLIGHT_WARNING: &str = "🚨 Route exceeds daylight hours - consider splitting";
pub const TIGHT_TURNAROUND_WARNING: &str = "⏰ Tight turnaround schedule - monitor progress";

impl MunterTerrain {
    /// Travel rate in km-equivalent per hour.
    pub fn rate_kmh(self) -> f64 {
        match self {
            MunterTerrain::Uphill => 4.0,
            MunterTerrain::Flat => 6.0,
            MunterTerrain::Downhill => 6.0,
            MunterTerrain::Bushwhacking => 2.0,
            MunterTerrain::Skiing => 10.0,
        }
    }
}

impl ChauvinDifficulty {
    /// Minutes per 60 m pitch equivalent.
    pub fn minutes_per_pitch(self) -> f64 {
        match self {
            ChauvinDifficulty::Class3Easy => 10.0,
            ChauvinDifficulty::Class3Hard => 15.0,
            ChauvinDifficulty::Class4Easy => 20.0,
            ChauvinDifficulty::Class4Hard => 25.0,
            ChauvinDifficulty::SnowModerate => 18.0,
            ChauvinDifficulty::SnowSteep => 30.0,
        }
    }
}

impl TechnicalGrade {
    /// Minutes per roped pitch.
    pub fn minutes_per_pitch(self) -> f64 {
        match self {
            TechnicalGrade::Easy => 30.0,
            TechnicalGrade::Moderate => 45.0,
            TechnicalGrade::Intermediate => 60.0,
            TechnicalGrade::Hard => 75.0,
            TechnicalGrade::Elite => 90.0,
        }
    }
}

fn banded(
    base_hours: f64,
    factors: &PaceFactors,
    band: (f64, f64),
    method: EstimationMethod,
) -> TimeEstimate {
    let realistic = base_hours * factors.combined();
    TimeEstimate {
        optimistic: realistic * band.0,
        realistic,
        conservative: realistic * band.1,
        method,
    }
}

/// Munter method for hiking and skiing (class 1-2 terrain).
///
/// `distance_km` in kilometers, `elevation_m` gain in meters.
pub fn munter_method(
    distance_km: f64,
    elevation_m: f64,
    terrain: MunterTerrain,
    factors: &PaceFactors,
) -> TimeEstimate {
    let base = (distance_km + elevation_m / 100.0) / terrain.rate_kmh();
    banded(base, factors, MUNTER_BAND, EstimationMethod::Munter)
}

/// Chauvin system for scrambling and snow climbing (class 3-4 terrain).
pub fn chauvin_system(
    distance_km: f64,
    elevation_m: f64,
    difficulty: ChauvinDifficulty,
    factors: &PaceFactors,
) -> TimeEstimate {
    let pitch_equivalents = (distance_km * 1000.0 + elevation_m) / CHAUVIN_PITCH_M;
    let base = pitch_equivalents * difficulty.minutes_per_pitch() / 60.0;
    banded(base, factors, CHAUVIN_BAND, EstimationMethod::Chauvin)
}

/// Technical system for roped climbing (class 5 terrain).
pub fn technical_system(
    pitches: u32,
    grade: TechnicalGrade,
    factors: &PaceFactors,
) -> TimeEstimate {
    let base = f64::from(pitches) * grade.minutes_per_pitch() / 60.0;
    banded(base, factors, TECHNICAL_BAND, EstimationMethod::Technical)
}

/// Start-time and turnaround guidance for a total realistic time.
pub fn safety_recommendations(total_hours: f64, season: Season) -> SafetyRecommendations {
    let daylight = season.daylight_hours();

    let latest_start = daylight - total_hours - DAYLIGHT_BUFFER_HOURS;
    let recommended_start = (latest_start - 1.0).max(EARLIEST_START_HOUR);
    let turnaround = total_hours * TURNAROUND_FRACTION;

    let mut warnings = Vec::new();
    if total_hours > daylight - DAYLIGHT_BUFFER_HOURS {
        warnings.push(HEADLAMP_WARNING.to_string());
    }
    if total_hours > daylight {
        warnings.push(EXCEEDS_DAYLIGHT_WARNING.to_string());
    }
    if turnaround > daylight * 0.5 {
        warnings.push(TIGHT_TURNAROUND_WARNING.to_string());
    }

    SafetyRecommendations {
        recommended_start_time: format_clock(recommended_start),
        latest_start_time: format_clock(latest_start),
        turnaround_time: format_clock(turnaround),
        daylight_margin: latest_start,
        warnings,
    }
}

impl SafetyRecommendations {
    pub fn level(&self) -> SafetyLevel {
        if self.warnings.is_empty() {
            SafetyLevel::Ok
        } else if self
            .warnings
            .iter()
            .any(|warning| warning == EXCEEDS_DAYLIGHT_WARNING)
        {
            SafetyLevel::Danger
        } else {
            SafetyLevel::Caution
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pace::PaceFactorKind;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn munter_uphill_reference_values() {
        let estimate = munter_method(5.0, 500.0, MunterTerrain::Uphill, &PaceFactors::default());
        assert!(close(estimate.realistic, 2.5));
        assert!(close(estimate.optimistic, 2.125));
        assert!(close(estimate.conservative, 3.125));
        assert_eq!(estimate.method, EstimationMethod::Munter);
    }

    #[test]
    fn munter_rates_per_terrain() {
        let factors = PaceFactors::default();
        assert!(close(munter_method(6.0, 0.0, MunterTerrain::Flat, &factors).realistic, 1.0));
        assert!(close(munter_method(6.0, 0.0, MunterTerrain::Downhill, &factors).realistic, 1.0));
        let bushwhack = munter_method(2.0, 0.0, MunterTerrain::Bushwhacking, &factors);
        assert!(close(bushwhack.realistic, 1.0));
        assert!(close(munter_method(10.0, 0.0, MunterTerrain::Skiing, &factors).realistic, 1.0));
    }

    #[test]
    fn technical_reference_values() {
        let estimate = technical_system(6, TechnicalGrade::Moderate, &PaceFactors::default());
        assert!(close(estimate.realistic, 4.5));
        assert!(close(estimate.conservative, 6.3));
        assert!(close(estimate.optimistic, 3.375));
        assert_eq!(estimate.method, EstimationMethod::Technical);
    }

    #[test]
    fn chauvin_reference_values() {
        let estimate = chauvin_system(
            2.0,
            400.0,
            ChauvinDifficulty::Class3Easy,
            &PaceFactors::default(),
        );
        assert!(close(estimate.realistic, 40.0 * 10.0 / 60.0));
        assert!(close(estimate.optimistic, estimate.realistic * 0.8));
        assert!(close(estimate.conservative, estimate.realistic * 1.3));
        assert_eq!(estimate.method, EstimationMethod::Chauvin);
    }

    #[test]
    fn chauvin_snow_rates() {
        let factors = PaceFactors::default();
        // 60 m of pure elevation = one pitch equivalent
        let moderate = chauvin_system(0.0, 60.0, ChauvinDifficulty::SnowModerate, &factors);
        let steep = chauvin_system(0.0, 60.0, ChauvinDifficulty::SnowSteep, &factors);
        assert!(close(moderate.realistic, 0.3));
        assert!(close(steep.realistic, 0.5));
    }

    #[test]
    fn pace_factors_scale_realistic_time() {
        let slow = PaceFactors {
            weather: 1.2,
            party_size: 1.1,
            ..PaceFactors::default()
        };
        let estimate = munter_method(5.0, 500.0, MunterTerrain::Uphill, &slow);
        assert!(close(estimate.realistic, 2.5 * 1.2 * 1.1));
    }

    #[test]
    fn each_factor_above_neutral_slows_the_party() {
        let baseline =
            munter_method(8.0, 900.0, MunterTerrain::Uphill, &PaceFactors::default()).realistic;
        for kind in PaceFactorKind::ALL {
            let factors = PaceFactors::default().with(kind, 1.1);
            let adjusted = munter_method(8.0, 900.0, MunterTerrain::Uphill, &factors).realistic;
            assert!(adjusted > baseline, "{kind} did not increase time");
        }
    }

    #[test]
    fn unvalidated_input_propagates_nan() {
        let estimate = munter_method(f64::NAN, 100.0, MunterTerrain::Flat, &PaceFactors::default());
        assert!(estimate.realistic.is_nan());
    }

    #[test]
    fn winter_long_day_warns() {
        let recs = safety_recommendations(10.0, Season::Winter);
        assert!(close(recs.daylight_margin, -4.0));
        assert_eq!(recs.latest_start_time, "-4:00");
        assert_eq!(recs.recommended_start_time, "5:00");
        assert_eq!(recs.turnaround_time, "6:00");
        assert_eq!(
            recs.warnings,
            vec![
                HEADLAMP_WARNING.to_string(),
                EXCEEDS_DAYLIGHT_WARNING.to_string(),
                TIGHT_TURNAROUND_WARNING.to_string(),
            ]
        );
        assert_eq!(recs.level(), SafetyLevel::Danger);
    }

    #[test]
    fn short_summer_day_is_clear() {
        let recs = safety_recommendations(4.0, Season::Summer);
        assert!(recs.warnings.is_empty());
        assert!(close(recs.daylight_margin, 8.0));
        assert_eq!(recs.latest_start_time, "8:00");
        assert_eq!(recs.recommended_start_time, "7:00");
        assert_eq!(recs.turnaround_time, "2:24");
        assert_eq!(recs.level(), SafetyLevel::Ok);
    }

    #[test]
    fn headlamp_only_is_caution() {
        // fall: 10h daylight, 8.5h > 8h triggers headlamp, turnaround 5.1 > 5
        let recs = safety_recommendations(8.5, Season::Fall);
        assert_eq!(recs.warnings[0], HEADLAMP_WARNING);
        assert!(!recs.warnings.iter().any(|w| w == EXCEEDS_DAYLIGHT_WARNING));
        assert_eq!(recs.level(), SafetyLevel::Caution);
    }
}

//! Human pace factors applied on top of the terrain formulas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Independent multiplicative adjustments (1.0 = neutral).
///
/// Values above 1.0 slow the party down. The UI constrains each factor to
/// [`PaceFactorKind::documented_range`], but nothing here clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceFactors {
    #[serde(default = "neutral")]
    pub fitness: f64,
    #[serde(default = "neutral")]
    pub weather: f64,
    #[serde(default = "neutral")]
    pub party_size: f64,
    #[serde(default = "neutral")]
    pub pack_weight: f64,
    #[serde(default = "neutral")]
    pub experience: f64,
}

fn neutral() -> f64 {
    1.0
}

impl Default for PaceFactors {
    fn default() -> Self {
        Self {
            fitness: 1.0,
            weather: 1.0,
            party_size: 1.0,
            pack_weight: 1.0,
            experience: 1.0,
        }
    }
}

impl PaceFactors {
    /// Product of all five factors.
    pub fn combined(&self) -> f64 {
        self.fitness * self.weather * self.party_size * self.pack_weight * self.experience
    }

    pub fn get(&self, kind: PaceFactorKind) -> f64 {
        match kind {
            PaceFactorKind::Fitness => self.fitness,
            PaceFactorKind::Weather => self.weather,
            PaceFactorKind::PartySize => self.party_size,
            PaceFactorKind::PackWeight => self.pack_weight,
            PaceFactorKind::Experience => self.experience,
        }
    }

    /// Copy with a single factor replaced.
    pub fn with(mut self, kind: PaceFactorKind, value: f64) -> Self {
        match kind {
            PaceFactorKind::Fitness => self.fitness = value,
            PaceFactorKind::Weather => self.weather = value,
            PaceFactorKind::PartySize => self.party_size = value,
            PaceFactorKind::PackWeight => self.pack_weight = value,
            PaceFactorKind::Experience => self.experience = value,
        }
        self
    }

    /// Factors that fall outside the slider ranges the UI offers.
    pub fn out_of_range(&self) -> Vec<PaceFactorNotice> {
        PaceFactorKind::ALL
            .iter()
            .filter_map(|kind| {
                let value = self.get(*kind);
                let range = kind.documented_range();
                (!range.contains(&value)).then(|| PaceFactorNotice {
                    factor: *kind,
                    value,
                    min: *range.start(),
                    max: *range.end(),
                })
            })
            .collect()
    }

    /// Display label for every factor, in declaration order.
    pub fn labels(&self) -> Vec<(PaceFactorKind, &'static str)> {
        PaceFactorKind::ALL
            .iter()
            .map(|kind| (*kind, kind.label(self.get(*kind))))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaceFactorKind {
    Fitness,
    Weather,
    PartySize,
    PackWeight,
    Experience,
}

impl PaceFactorKind {
    pub const ALL: [PaceFactorKind; 5] = [
        PaceFactorKind::Fitness,
        PaceFactorKind::Weather,
        PaceFactorKind::PartySize,
        PaceFactorKind::PackWeight,
        PaceFactorKind::Experience,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaceFactorKind::Fitness => "fitness",
            PaceFactorKind::Weather => "weather",
            PaceFactorKind::PartySize => "partySize",
            PaceFactorKind::PackWeight => "packWeight",
            PaceFactorKind::Experience => "experience",
        }
    }

    /// Slider bounds offered by the planning UI.
    pub fn documented_range(self) -> RangeInclusive<f64> {
        match self {
            PaceFactorKind::Fitness => 0.8..=1.2,
            PaceFactorKind::Weather => 0.9..=1.3,
            PaceFactorKind::PartySize => 1.0..=1.4,
            PaceFactorKind::PackWeight => 0.95..=1.15,
            PaceFactorKind::Experience => 0.9..=1.1,
        }
    }

    /// Human label for a factor value.
    pub fn label(self, value: f64) -> &'static str {
        match self {
            PaceFactorKind::Fitness => {
                if value <= 0.85 {
                    "Below Average"
                } else if value >= 1.15 {
                    "Above Average"
                } else {
                    "Average"
                }
            }
            PaceFactorKind::Weather => {
                if value <= 0.95 {
                    "Perfect"
                } else if value >= 1.2 {
                    "Poor"
                } else {
                    "Good"
                }
            }
            PaceFactorKind::PartySize => {
                if value <= 1.05 {
                    "Solo/Pair"
                } else if value >= 1.25 {
                    "Large Group"
                } else {
                    "Small Group"
                }
            }
            PaceFactorKind::PackWeight => {
                if value <= 0.98 {
                    "Light Pack"
                } else if value >= 1.1 {
                    "Heavy Pack"
                } else {
                    "Normal Pack"
                }
            }
            PaceFactorKind::Experience => {
                if value <= 0.95 {
                    "Expert"
                } else if value >= 1.05 {
                    "Beginner"
                } else {
                    "Intermediate"
                }
            }
        }
    }
}

impl fmt::Display for PaceFactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A factor outside its documented slider range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceFactorNotice {
    pub factor: PaceFactorKind,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for PaceFactorNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} factor {} is outside the usual range {}-{}",
            self.factor, self.value, self.min, self.max
        )
    }
}

//! Input checks applied before a full estimate.
//!
//! The formulas themselves never reject anything; these checks catch input
//! that would otherwise turn into NaN or negative times.

use crate::error::EstimateError;
use crate::models::RouteData;
use crate::pace::{PaceFactorKind, PaceFactors};
use crate::route_analyzer::{classify_route, RouteRegime};

pub fn validate_route(route: &RouteData) -> Result<(), EstimateError> {
    check_measure("distance", route.distance)?;
    check_measure("elevationGain", route.elevation_gain)?;
    check_measure("elevationLoss", route.elevation_loss)?;

    // Only a pitched class 5 climb still has a segment without any distance.
    if route.distance == 0.0 && classify_route(route) != RouteRegime::Technical {
        return Err(EstimateError::InvalidRoute {
            field: "distance",
            reason: "must be greater than zero".to_string(),
        });
    }

    if let Some(grade) = route.climbing_grade.as_deref() {
        if grade.trim() != grade {
            return Err(EstimateError::InvalidRoute {
                field: "climbingGrade",
                reason: format!("unexpected whitespace in {:?}", grade),
            });
        }
    }

    Ok(())
}

pub fn validate_pace_factors(factors: &PaceFactors) -> Result<(), EstimateError> {
    for kind in PaceFactorKind::ALL {
        let value = factors.get(kind);
        if !value.is_finite() || value <= 0.0 {
            return Err(EstimateError::InvalidPaceFactor {
                factor: kind,
                value,
            });
        }
    }
    Ok(())
}

fn check_measure(field: &'static str, value: f64) -> Result<(), EstimateError> {
    if !value.is_finite() {
        return Err(EstimateError::InvalidRoute {
            field,
            reason: "must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(EstimateError::InvalidRoute {
            field,
            reason: format!("cannot be negative (got {})", value),
        });
    }
    Ok(())
}

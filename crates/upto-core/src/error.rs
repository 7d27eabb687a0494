use crate::pace::PaceFactorKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("Invalid route {field}: {reason}")]
    InvalidRoute {
        field: &'static str,
        reason: String,
    },
    #[error("Invalid pace factor {factor}: {value} (must be a positive number)")]
    InvalidPaceFactor { factor: PaceFactorKind, value: f64 },
}

impl EstimateError {
    /// Name of the offending input field, as the web client spells it.
    pub fn field(&self) -> &'static str {
        match self {
            EstimateError::InvalidRoute { field, .. } => field,
            EstimateError::InvalidPaceFactor { factor, .. } => factor.as_str(),
        }
    }
}

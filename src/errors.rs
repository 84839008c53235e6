use thiserror::Error;

use crate::nutrients::NutrientType;

/// Errors produced by the intake engine.
///
/// `EmptyCategory` is an expected outcome (no data yet for a category); the other
/// variants point at corrupt upstream data and should be surfaced, not defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntakeError {
    #[error("invalid target for '{nutrient}': upper bound intake must be positive, got {value}")]
    InvalidTarget { nutrient: String, value: f64 },

    #[error("invalid consumption for '{nutrient}': daily consumed must be non-negative, got {value}")]
    InvalidConsumption { nutrient: String, value: f64 },

    #[error("no observations for category {0}")]
    EmptyCategory(NutrientType),

    #[error("measurement '{0}' has no parenthesized unit")]
    MalformedMeasurement(String),

    #[error("unknown nutrient: {0}")]
    UnknownNutrient(String),
}

impl IntakeError {
    /// True for outcomes the caller is expected to route to a fallback state.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, IntakeError::EmptyCategory(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = IntakeError::InvalidTarget {
            nutrient: "C".to_string(),
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid target for 'C': upper bound intake must be positive, got 0"
        );
        assert_eq!(
            IntakeError::EmptyCategory(NutrientType::Mineral).to_string(),
            "no observations for category Mineral"
        );
        assert_eq!(
            IntakeError::MalformedMeasurement("Milligrams".to_string()).to_string(),
            "measurement 'Milligrams' has no parenthesized unit"
        );
    }

    #[test]
    fn test_only_empty_category_is_recoverable() {
        assert!(IntakeError::EmptyCategory(NutrientType::Vitamin).is_recoverable());
        assert!(!IntakeError::MalformedMeasurement(String::new()).is_recoverable());
        assert!(!IntakeError::InvalidConsumption {
            nutrient: "Iron".to_string(),
            value: -1.0
        }
        .is_recoverable());
    }
}

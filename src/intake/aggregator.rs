use serde::{Deserialize, Serialize};

use crate::errors::IntakeError;
use crate::nutrients::NutrientType;
use crate::records::NutrientObservation;

pub const MAX_PERCENT: f64 = 100.0;

/// Percentage-of-target for one nutrient, ready for a progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentedNutrient {
    pub name: String,
    #[serde(rename = "type")]
    pub nutrient_type: NutrientType,
    /// Always within `0.0..=100.0`.
    #[serde(rename = "precented")]
    pub percent: f64,
    pub consumed: f64,
    pub max: f64,
    pub measurement: String,
}

/// `consumed / target * 100`, capped at 100.
///
/// The target is checked before dividing so callers never see `NaN` or infinity.
pub fn clamped_percent(nutrient: &str, consumed: f64, target: f64) -> Result<f64, IntakeError> {
    if !target.is_finite() || target <= 0.0 {
        return Err(IntakeError::InvalidTarget {
            nutrient: nutrient.to_string(),
            value: target,
        });
    }
    if !consumed.is_finite() || consumed < 0.0 {
        return Err(IntakeError::InvalidConsumption {
            nutrient: nutrient.to_string(),
            value: consumed,
        });
    }
    let raw = consumed / target * 100.0;
    Ok(if raw > MAX_PERCENT { MAX_PERCENT } else { raw })
}

/// Computes the clamped percentage of every observation of `nutrient_type`, in input order.
pub fn compute_percentages(
    observations: &[NutrientObservation],
    nutrient_type: NutrientType,
) -> Result<Vec<PercentedNutrient>, IntakeError> {
    observations
        .iter()
        .filter(|obs| obs.nutrient_type == nutrient_type)
        .map(|obs| {
            let percent =
                clamped_percent(&obs.nutrient_name, obs.daily_consumed, obs.upper_bound_intake)?;
            Ok(PercentedNutrient {
                name: obs.nutrient_name.clone(),
                nutrient_type: obs.nutrient_type,
                percent,
                consumed: obs.daily_consumed,
                max: obs.upper_bound_intake,
                measurement: obs.measurement.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn vitamins() -> Vec<NutrientObservation> {
        vec![
            NutrientObservation::new("VitaminC", NutrientType::Vitamin, 45.0, 90.0, "Milligrams (mg)"),
            NutrientObservation::new("VitaminD", NutrientType::Vitamin, 0.0, 20.0, "IU (IU)"),
            NutrientObservation::new("Iron", NutrientType::Mineral, 30.0, 18.0, "Milligrams (mg)"),
        ]
    }

    #[test]
    fn test_compute_percentages_filters_and_divides() {
        let result = compute_percentages(&vitamins(), NutrientType::Vitamin).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "VitaminC");
        assert_eq!(result[0].percent, 50.0);
        assert_eq!(result[0].consumed, 45.0);
        assert_eq!(result[0].max, 90.0);
        assert_eq!(result[0].measurement, "Milligrams (mg)");
        assert_eq!(result[1].name, "VitaminD");
        assert_eq!(result[1].percent, 0.0);
    }

    #[test]
    fn test_overconsumption_is_clamped() {
        let obs = vec![NutrientObservation::new("Sodium", NutrientType::Mineral, 200.0, 100.0, "Milligrams (mg)")];
        let result = compute_percentages(&obs, NutrientType::Mineral).unwrap();
        assert_eq!(result[0].percent, 100.0);
        assert_eq!(result[0].consumed, 200.0);
    }

    #[test]
    fn test_consumed_equal_to_target_is_exactly_100() {
        assert_eq!(clamped_percent("Zinc", 11.0, 11.0).unwrap(), 100.0);
        assert_eq!(clamped_percent("Zinc", 0.3, 0.3).unwrap(), 100.0);
    }

    #[test]
    fn test_no_matching_type_yields_empty() {
        let result = compute_percentages(&vitamins(), NutrientType::Macronutrient).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_invalid_target_is_rejected_before_division() {
        let mut obs = vitamins();
        obs[1].upper_bound_intake = 0.0;
        let err = compute_percentages(&obs, NutrientType::Vitamin).unwrap_err();
        assert_eq!(
            err,
            IntakeError::InvalidTarget { nutrient: "VitaminD".to_string(), value: 0.0 }
        );

        obs[1].upper_bound_intake = -5.0;
        assert!(matches!(
            compute_percentages(&obs, NutrientType::Vitamin),
            Err(IntakeError::InvalidTarget { .. })
        ));
        assert!(matches!(
            clamped_percent("x", 1.0, f64::NAN),
            Err(IntakeError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_invalid_target_in_other_category_is_ignored() {
        let mut obs = vitamins();
        obs[2].upper_bound_intake = 0.0;
        assert!(compute_percentages(&obs, NutrientType::Vitamin).is_ok());
        assert!(compute_percentages(&obs, NutrientType::Mineral).is_err());
    }

    #[test]
    fn test_negative_consumption_is_rejected() {
        assert!(matches!(
            clamped_percent("Fat", -1.0, 70.0),
            Err(IntakeError::InvalidConsumption { .. })
        ));
    }

    #[test]
    fn test_random_observations_stay_in_range_and_are_idempotent() {
        let mut rng = rand::thread_rng();
        let observations: Vec<NutrientObservation> = (0..500)
            .map(|i| {
                NutrientObservation::new(
                    format!("n{}", i),
                    NutrientType::Mineral,
                    if i % 7 == 0 { 0.0 } else { rng.gen_range(0.0..5000.0) },
                    rng.gen_range(0.001..2500.0),
                    "Milligrams (mg)",
                )
            })
            .collect();

        let first = compute_percentages(&observations, NutrientType::Mineral).unwrap();
        let second = compute_percentages(&observations, NutrientType::Mineral).unwrap();
        assert_eq!(first, second);

        for (obs, row) in observations.iter().zip(&first) {
            assert!((0.0..=100.0).contains(&row.percent), "{} out of range", row.percent);
            if obs.daily_consumed == 0.0 {
                assert_eq!(row.percent, 0.0);
            }
            if obs.daily_consumed >= obs.upper_bound_intake {
                assert_eq!(row.percent, 100.0);
            }
        }
    }

    #[test]
    fn test_serializes_with_widget_field_names() {
        let result = compute_percentages(&vitamins(), NutrientType::Vitamin).unwrap();
        let value = serde_json::to_value(&result[0]).unwrap();
        assert_eq!(value["precented"], 50.0);
        assert_eq!(value["type"], "Vitamin");
        assert_eq!(value["max"], 90.0);
    }
}

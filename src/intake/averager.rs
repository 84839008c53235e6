use serde::{Deserialize, Serialize};

use super::aggregator::{clamped_percent, compute_percentages};
use crate::errors::IntakeError;
use crate::nutrients::NutrientType;
use crate::records::{NutrientObservation, Record};

const CALORIES_NAME: &str = "Calories";

/// Gauge value for one nutrient category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub nutrient_type: NutrientType,
    pub average: f64,
}

/// Mean of the clamped percentages of every observation of `nutrient_type`.
pub fn average_percent(
    observations: &[NutrientObservation],
    nutrient_type: NutrientType,
) -> Result<f64, IntakeError> {
    let percented = compute_percentages(observations, nutrient_type)?;
    if percented.is_empty() {
        return Err(IntakeError::EmptyCategory(nutrient_type));
    }
    let sum: f64 = percented.iter().map(|p| p.percent).sum();
    Ok(sum / percented.len() as f64)
}

/// Calorie gauge: a single clamped ratio instead of a per-nutrient mean.
pub fn calorie_percent(consumed_calories: f64, calories_to_consume: f64) -> Result<f64, IntakeError> {
    clamped_percent(CALORIES_NAME, consumed_calories, calories_to_consume)
}

/// Gauge value of one category for a record.
///
/// Calories come from the record's scalar pair when a calorie target is set, and
/// otherwise from any `Calories` observations in its intake view.
pub fn category_summary(
    record: &Record,
    nutrient_type: NutrientType,
) -> Result<CategorySummary, IntakeError> {
    let average = match nutrient_type {
        NutrientType::Calories if record.daily_calories_to_consume != 0.0 => calorie_percent(
            record.daily_consumed_calories,
            record.daily_calories_to_consume,
        )?,
        _ => average_percent(&record.daily_intake_views, nutrient_type)?,
    };
    Ok(CategorySummary {
        nutrient_type,
        average,
    })
}

/// Gauge values of every category, in [`NutrientType::ALL`] order.
///
/// Each category fails on its own, so one bad target never hides the other gauges.
pub fn category_summaries(
    record: &Record,
) -> Vec<(NutrientType, Result<CategorySummary, IntakeError>)> {
    NutrientType::ALL
        .into_iter()
        .map(|nutrient_type| (nutrient_type, category_summary(record, nutrient_type)))
        .collect()
}

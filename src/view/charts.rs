use serde::Serialize;

use super::formatter::DisplayRow;
use crate::errors::IntakeError;
use crate::intake::{CategorySummary, MAX_PERCENT};
use crate::nutrients::NutrientType;

const KCAL_PER_GRAM_FAT: f64 = 9.0;
const KCAL_PER_GRAM_CARBOHYDRATES: f64 = 4.0;
const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Ring gauge: filled share plus the remainder of the ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gauge {
    pub label: String,
    pub nutrient_type: NutrientType,
    pub percent: f64,
    pub remainder: f64,
}

impl From<&CategorySummary> for Gauge {
    fn from(summary: &CategorySummary) -> Self {
        Self {
            label: summary.nutrient_type.to_string(),
            nutrient_type: summary.nutrient_type,
            percent: summary.average,
            remainder: MAX_PERCENT - summary.average,
        }
    }
}

/// Input of the consumed-amount bar chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BarChartSeries {
    #[serde(rename = "dataNames")]
    pub labels: Vec<String>,
    #[serde(rename = "data")]
    pub values: Vec<f64>,
}

impl BarChartSeries {
    /// Tallest bar, used as the chart's y-domain; 0 for an empty series.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

pub fn bar_chart_series(rows: &[DisplayRow]) -> BarChartSeries {
    BarChartSeries {
        labels: rows.iter().map(|row| row.label.clone()).collect(),
        values: rows.iter().map(|row| row.consumed).collect(),
    }
}

/// Share of energy contributed by each macronutrient, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    pub fat: f64,
    pub carbohydrates: f64,
    pub protein: f64,
}

/// Splits the energy of fat/carbohydrate/protein grams using 9/4/4 kcal per gram.
///
/// With no macronutrients at all the pie is drawn as equal thirds.
pub fn macro_calorie_split(fat: f64, carbohydrates: f64, protein: f64) -> Result<MacroSplit, IntakeError> {
    for (name, grams) in [("Fat", fat), ("Carbohydrates", carbohydrates), ("Protein", protein)] {
        if !grams.is_finite() || grams < 0.0 {
            return Err(IntakeError::InvalidConsumption {
                nutrient: name.to_string(),
                value: grams,
            });
        }
    }

    let fat_kcal = fat * KCAL_PER_GRAM_FAT;
    let carbohydrate_kcal = carbohydrates * KCAL_PER_GRAM_CARBOHYDRATES;
    let protein_kcal = protein * KCAL_PER_GRAM_PROTEIN;
    let total = fat_kcal + carbohydrate_kcal + protein_kcal;

    if total == 0.0 {
        let third = MAX_PERCENT / 3.0;
        return Ok(MacroSplit {
            fat: third,
            carbohydrates: third,
            protein: third,
        });
    }

    Ok(MacroSplit {
        fat: fat_kcal * MAX_PERCENT / total,
        carbohydrates: carbohydrate_kcal * MAX_PERCENT / total,
        protein: protein_kcal * MAX_PERCENT / total,
    })
}

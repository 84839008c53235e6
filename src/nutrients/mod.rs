pub mod catalog;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use catalog::{by_type, lookup, NutrientInfo, NUTRIENT_CATALOG};

/// Classification used for grouped averaging and for picking a gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NutrientType {
    Vitamin,
    Mineral,
    Macronutrient,
    Calories,
}

impl NutrientType {
    pub const ALL: [NutrientType; 4] = [
        NutrientType::Vitamin,
        NutrientType::Mineral,
        NutrientType::Macronutrient,
        NutrientType::Calories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientType::Vitamin => "Vitamin",
            NutrientType::Mineral => "Mineral",
            NutrientType::Macronutrient => "Macronutrient",
            NutrientType::Calories => "Calories",
        }
    }

    /// Path segment of the nutrient info page, if the category has one.
    pub fn info_segment(&self) -> Option<&'static str> {
        match self {
            NutrientType::Vitamin => Some("vitamin"),
            NutrientType::Mineral => Some("mineral"),
            NutrientType::Macronutrient => Some("macronutrient"),
            NutrientType::Calories => None,
        }
    }
}

impl fmt::Display for NutrientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NutrientType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NutrientType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown nutrient type: {}", s))
    }
}

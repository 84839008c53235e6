use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::IntakeError;
use crate::nutrients::{self, NutrientInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    SuperActive,
}

impl ActivityLevel {
    /// Multiplier applied to the basal metabolic rate.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
        }
    }
}

/// Inputs for the personalized daily calorie target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyProfile {
    pub gender: Gender,
    pub kilograms: f64,
    pub height_cm: f64,
    pub age: u32,
    pub activity: ActivityLevel,
}

impl BodyProfile {
    /// Revised Harris-Benedict equation, in kcal/day.
    pub fn basal_metabolic_rate(&self) -> f64 {
        let age = f64::from(self.age);
        match self.gender {
            Gender::Male => 88.362 + 13.397 * self.kilograms + 4.799 * self.height_cm - 5.677 * age,
            Gender::Female => 447.593 + 9.247 * self.kilograms + 3.098 * self.height_cm - 4.330 * age,
        }
    }

    pub fn daily_calories(&self) -> f64 {
        self.basal_metabolic_rate() * self.activity.factor()
    }
}

/// Upper bound intakes keyed by catalog nutrient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyTargets {
    bounds: HashMap<&'static str, f64>,
}

impl DailyTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target for a catalog nutrient, accepting any name `nutrients::lookup` accepts.
    pub fn insert(&mut self, nutrient: &str, upper_bound: f64) -> Result<(), IntakeError> {
        let info = nutrients::lookup(nutrient)
            .ok_or_else(|| IntakeError::UnknownNutrient(nutrient.to_string()))?;
        self.bounds.insert(info.key, upper_bound);
        Ok(())
    }

    pub fn upper_bound(&self, nutrient: &str) -> Option<f64> {
        let info = nutrients::lookup(nutrient)?;
        self.bounds.get(info.key).copied()
    }

    /// Targeted nutrients in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static NutrientInfo, f64)> + '_ {
        nutrients::NUTRIENT_CATALOG
            .iter()
            .filter_map(move |info| self.bounds.get(info.key).map(|&bound| (info, bound)))
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

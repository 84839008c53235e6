use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::targets::DailyTargets;
use crate::nutrients::{self, NutrientInfo, NutrientType};
use crate::records::{FoodEntry, FoodSource, NutrientObservation, Record, Storage, StorageId};

/// Per-100g profile of a catalog food.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogFood {
    pub name: String,
    pub calories_per_100g: f64,
    /// Keyed by catalog nutrient key.
    pub nutrients_per_100g: HashMap<&'static str, f64>,
}

/// Reference foods that catalog entries resolve against.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<CatalogFood>,
}

impl FoodCatalog {
    pub fn new(foods: Vec<CatalogFood>) -> Self {
        Self { foods }
    }

    pub fn find(&self, name: &str) -> Option<&CatalogFood> {
        let name = name.trim();
        self.foods.iter().find(|food| food.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Absolute amounts eaten across a record or storage.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConsumptionTotals {
    pub calories: f64,
    pub nutrients: BTreeMap<&'static str, f64>,
}

impl ConsumptionTotals {
    pub fn amount(&self, nutrient: &str) -> f64 {
        nutrients::lookup(nutrient)
            .and_then(|info| self.nutrients.get(info.key))
            .copied()
            .unwrap_or(0.0)
    }

    /// Eaten amounts of one category, in catalog order.
    pub fn by_category(
        &self,
        nutrient_type: NutrientType,
    ) -> impl Iterator<Item = (&'static NutrientInfo, f64)> + '_ {
        nutrients::by_type(nutrient_type)
            .filter_map(move |info| self.nutrients.get(info.key).map(|&amount| (info, amount)))
    }

    /// Returns whether the catalog profile was used for `food`.
    fn add_food(&mut self, food: &FoodEntry, catalog: Option<&FoodCatalog>) -> bool {
        let scale = food.scale();
        let reference = match food.source {
            FoodSource::Catalog => catalog.and_then(|c| c.find(&food.name)),
            FoodSource::Custom => None,
        };

        if let Some(reference) = reference {
            self.calories += reference.calories_per_100g * scale;
            for (&key, &per_100g) in &reference.nutrients_per_100g {
                *self.nutrients.entry(key).or_insert(0.0) += per_100g * scale;
            }
            return true;
        }

        self.calories += food.consumed_calories();
        for amount in &food.nutrients {
            match nutrients::lookup(&amount.name) {
                Some(info) => {
                    *self.nutrients.entry(info.key).or_insert(0.0) += amount.amount * scale;
                }
                None => debug!(food = %food.name, nutrient = %amount.name, "skipping untracked nutrient"),
            }
        }
        false
    }
}

/// One food of a storage with the amounts it contributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodConsumption {
    pub name: String,
    pub source: FoodSource,
    pub size: f64,
    /// The catalog profile replaced the one embedded in the entry.
    pub from_catalog: bool,
    pub totals: ConsumptionTotals,
}

/// Per-food and summed consumption of one meal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageReport {
    pub storage_id: StorageId,
    pub name: String,
    pub foods: Vec<FoodConsumption>,
    pub totals: ConsumptionTotals,
}

/// Sums every food of every storage in `record`, scaled by serving size.
///
/// Catalog foods use the reference profile when `catalog` knows them and fall back to
/// the profile embedded in the entry otherwise; custom foods always use their own.
pub fn record_consumption(record: &Record, catalog: Option<&FoodCatalog>) -> ConsumptionTotals {
    sum_foods(record.storage_views.iter().flat_map(|s| s.foods.iter()), catalog)
}

/// Same as [`record_consumption`] for a single meal.
pub fn storage_consumption(storage: &Storage, catalog: Option<&FoodCatalog>) -> ConsumptionTotals {
    sum_foods(storage.foods.iter(), catalog)
}

/// Amounts contributed by a single food, resolved the same way as the storage totals.
pub fn food_consumption(food: &FoodEntry, catalog: Option<&FoodCatalog>) -> FoodConsumption {
    let mut totals = ConsumptionTotals::default();
    let from_catalog = totals.add_food(food, catalog);
    FoodConsumption {
        name: food.name.clone(),
        source: food.source,
        size: food.size,
        from_catalog,
        totals,
    }
}

pub fn storage_report(storage: &Storage, catalog: Option<&FoodCatalog>) -> StorageReport {
    StorageReport {
        storage_id: storage.id,
        name: storage.name.clone(),
        foods: storage.foods.iter().map(|food| food_consumption(food, catalog)).collect(),
        totals: storage_consumption(storage, catalog),
    }
}

fn sum_foods<'a>(
    foods: impl Iterator<Item = &'a FoodEntry>,
    catalog: Option<&FoodCatalog>,
) -> ConsumptionTotals {
    let mut totals = ConsumptionTotals::default();
    for food in foods {
        totals.add_food(food, catalog);
    }
    totals
}

/// Builds a fresh intake view from consumption totals and personal targets, in catalog order.
pub fn build_observations(
    totals: &ConsumptionTotals,
    targets: &DailyTargets,
) -> Vec<NutrientObservation> {
    targets
        .iter()
        .map(|(info, upper_bound)| {
            let consumed = if info.nutrient_type == NutrientType::Calories {
                totals.calories
            } else {
                totals.nutrients.get(info.key).copied().unwrap_or(0.0)
            };
            NutrientObservation::new(
                info.key,
                info.nutrient_type,
                consumed,
                upper_bound,
                info.measurement,
            )
        })
        .collect()
}

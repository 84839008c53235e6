use serde::{Deserialize, Serialize};

use crate::nutrients::NutrientType;

pub type RecordId = u64;
pub type StorageId = u64;

/// One tracked nutrient for one record-day, as computed by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientObservation {
    pub nutrient_name: String,
    pub nutrient_type: NutrientType,
    pub daily_consumed: f64,
    pub upper_bound_intake: f64,
    pub measurement: String,
}

impl NutrientObservation {
    pub fn new(
        nutrient_name: impl Into<String>,
        nutrient_type: NutrientType,
        daily_consumed: f64,
        upper_bound_intake: f64,
        measurement: impl Into<String>,
    ) -> Self {
        Self {
            nutrient_name: nutrient_name.into(),
            nutrient_type,
            daily_consumed,
            upper_bound_intake,
            measurement: measurement.into(),
        }
    }
}

/// Top-level tracking container. Snapshots are replaced wholesale on re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub daily_intake_views: Vec<NutrientObservation>,
    #[serde(default)]
    pub storage_views: Vec<Storage>,
    #[serde(default)]
    pub daily_calories_to_consume: f64,
    #[serde(default)]
    pub daily_consumed_calories: f64,
}

impl Record {
    pub fn storage(&self, storage_id: StorageId) -> Option<&Storage> {
        self.storage_views.iter().find(|s| s.id == storage_id)
    }
}

/// A meal inside a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub id: StorageId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub foods: Vec<FoodEntry>,
    /// Server-side total; `total_calories` recomputes it from the foods.
    #[serde(default)]
    pub consumed_calories: f64,
}

impl Storage {
    pub fn total_calories(&self) -> f64 {
        self.foods.iter().map(FoodEntry::consumed_calories).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodSource {
    #[default]
    Catalog,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientAmount {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    pub amount: f64,
}

/// A food in a storage. `calories` and `nutrients` are per 100 g; `size` is the
/// serving in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    #[serde(default)]
    pub source: FoodSource,
    pub size: f64,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub nutrients: Vec<NutrientAmount>,
}

impl FoodEntry {
    pub fn scale(&self) -> f64 {
        self.size / 100.0
    }

    pub fn consumed_calories(&self) -> f64 {
        self.calories * self.scale()
    }

    /// Amount of `nutrient` eaten with this serving, from the embedded profile.
    pub fn consumed_amount(&self, nutrient: &str) -> Option<f64> {
        self.nutrients
            .iter()
            .find(|n| n.name.eq_ignore_ascii_case(nutrient))
            .map(|n| n.amount * self.scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oats() -> FoodEntry {
        FoodEntry {
            name: "Oats".to_string(),
            source: FoodSource::Catalog,
            size: 50.0,
            calories: 380.0,
            nutrients: vec![
                NutrientAmount { name: "Protein".to_string(), unit: "g".to_string(), amount: 13.0 },
                NutrientAmount { name: "Iron".to_string(), unit: "mg".to_string(), amount: 4.0 },
            ],
        }
    }

    #[test]
    fn test_food_entry_scales_by_serving() {
        let food = oats();
        assert_eq!(food.scale(), 0.5);
        assert_eq!(food.consumed_calories(), 190.0);
        assert_eq!(food.consumed_amount("protein"), Some(6.5));
        assert_eq!(food.consumed_amount("Iron"), Some(2.0));
        assert_eq!(food.consumed_amount("Zinc"), None);
    }

    #[test]
    fn test_storage_total_calories() {
        let mut banana = oats();
        banana.name = "Banana".to_string();
        banana.size = 100.0;
        banana.calories = 89.0;
        let storage = Storage {
            id: 1,
            name: "First Meal".to_string(),
            foods: vec![oats(), banana],
            consumed_calories: 0.0,
        };
        assert_eq!(storage.total_calories(), 279.0);
    }

    #[test]
    fn test_record_deserializes_from_api_json() {
        let json = r#"{
            "id": 7,
            "dailyIntakeViews": [
                {"nutrientName": "C", "nutrientType": "Vitamin", "dailyConsumed": 45,
                 "upperBoundIntake": 90, "measurement": "Milligrams (mg)"}
            ],
            "storageViews": [
                {"id": 3, "name": "Snacks", "foods": [
                    {"name": "Apple", "source": "custom", "size": 150, "calories": 52}
                ]}
            ],
            "dailyCaloriesToConsume": 2000
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.daily_intake_views[0].nutrient_type, NutrientType::Vitamin);
        assert_eq!(record.daily_intake_views[0].upper_bound_intake, 90.0);
        assert_eq!(record.daily_consumed_calories, 0.0);
        let storage = record.storage(3).unwrap();
        assert_eq!(storage.foods[0].source, FoodSource::Custom);
        assert!(storage.foods[0].nutrients.is_empty());
        assert!(record.storage(4).is_none());
    }
}

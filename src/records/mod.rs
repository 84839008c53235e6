pub mod locator;
pub mod model;

pub use locator::{find_record, find_storage};
pub use model::{
    FoodEntry, FoodSource, NutrientAmount, NutrientObservation, Record, RecordId, Storage,
    StorageId,
};

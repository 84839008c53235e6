pub mod aggregator;
pub mod averager;
pub mod consumption;
pub mod targets;

pub use aggregator::{clamped_percent, compute_percentages, PercentedNutrient, MAX_PERCENT};
pub use averager::{
    average_percent, calorie_percent, category_summaries, category_summary, CategorySummary,
};
pub use consumption::{
    build_observations, food_consumption, record_consumption, storage_consumption, storage_report,
    CatalogFood, ConsumptionTotals, FoodCatalog, FoodConsumption, StorageReport,
};
pub use targets::{ActivityLevel, BodyProfile, DailyTargets, Gender};

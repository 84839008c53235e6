use clap::Parser;
use std::path::PathBuf;

use crate::config::TrackerConfig;
use crate::nutrients::NutrientType;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the records JSON snapshot (overrides TRACKER_RECORDS_PATH)
    #[arg(short, long)]
    pub records: Option<PathBuf>,

    /// Path to the food catalog CSV (overrides TRACKER_FOOD_CATALOG_PATH)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Record to show
    #[arg(long)]
    pub record_id: u64,

    /// Show the food totals of one storage of the record
    #[arg(long)]
    pub storage_id: Option<u64>,

    /// Only show one category (Vitamin, Mineral, Macronutrient, Calories)
    #[arg(long)]
    pub category: Option<NutrientType>,

    /// Print the dashboard as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Command-line paths win over the environment.
    pub fn apply_to(&self, mut config: TrackerConfig) -> TrackerConfig {
        if let Some(records) = &self.records {
            config.records_path = records.clone();
        }
        if let Some(catalog) = &self.catalog {
            config.food_catalog_path = Some(catalog.clone());
        }
        config
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

use std::env;
use std::path::PathBuf;

pub const RECORDS_PATH_ENV_VAR: &str = "TRACKER_RECORDS_PATH";
pub const FOOD_CATALOG_PATH_ENV_VAR: &str = "TRACKER_FOOD_CATALOG_PATH";
pub const LOG_FILTER_ENV_VAR: &str = "TRACKER_LOG";

const DEFAULT_RECORDS_PATH: &str = "records.json";
const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for the command-line front end. The engine itself takes none of these.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub records_path: PathBuf,
    pub food_catalog_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
            food_catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            records_path: non_empty(RECORDS_PATH_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.records_path),
            food_catalog_path: non_empty(FOOD_CATALOG_PATH_ENV_VAR).map(PathBuf::from),
            log_filter: non_empty(LOG_FILTER_ENV_VAR).unwrap_or(defaults.log_filter),
        }
    }
}

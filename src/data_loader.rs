use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

use crate::intake::{CatalogFood, FoodCatalog};
use crate::nutrients;
use crate::records::Record;

// Expected column headers of the food catalog CSV. Every other column whose name
// (before any " (unit/100g)" suffix) is a catalog nutrient is read as per-100g amount.
const NAME_COL: &str = "Name";
const KCAL_COL: &str = "kcal/100g";

fn parse_optional_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

fn nutrient_key_for_header(header: &str) -> Option<&'static str> {
    let name = header.split(" (").next().unwrap_or(header);
    nutrients::lookup(name).map(|info| info.key)
}

pub fn load_food_catalog(csv_path: &Path) -> Result<FoodCatalog> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Food catalog CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open food catalog CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let name_idx = headers.iter().position(|h| h == NAME_COL).ok_or_else(|| anyhow::anyhow!("Column '{}' not found", NAME_COL))?;
    let kcal_idx = headers.iter().position(|h| h == KCAL_COL).ok_or_else(|| anyhow::anyhow!("Column '{}' not found", KCAL_COL))?;

    let nutrient_columns: Vec<(usize, &'static str)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != name_idx && *idx != kcal_idx)
        .filter_map(|(idx, header)| match nutrient_key_for_header(header) {
            Some(key) => Some((idx, key)),
            None => {
                debug!(column = header, "ignoring non-nutrient column");
                None
            }
        })
        .collect();

    let mut foods = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read record at row index {}", row_index))?;

        let name = record.get(name_idx).ok_or_else(|| anyhow::anyhow!("Missing name at row {}", row_index))?.trim().to_string();
        if name.is_empty() {
            continue;
        }

        let nutrients_per_100g: HashMap<&'static str, f64> = nutrient_columns
            .iter()
            .filter_map(|&(idx, key)| record.get(idx).and_then(parse_optional_f64).map(|v| (key, v)))
            .collect();

        foods.push(CatalogFood {
            name,
            calories_per_100g: record.get(kcal_idx).and_then(parse_optional_f64).unwrap_or(0.0),
            nutrients_per_100g,
        });
    }

    if foods.is_empty() {
        return Err(anyhow::anyhow!("No valid food catalog data loaded from {:?}", csv_path));
    }

    info!(foods = foods.len(), nutrient_columns = nutrient_columns.len(), "food catalog loaded");
    Ok(FoodCatalog::new(foods))
}

/// Rejects snapshots the locator cannot resolve unambiguously.
pub fn check_unique_ids(records: &[Record]) -> Result<()> {
    let mut record_ids = HashSet::new();
    for record in records {
        if !record_ids.insert(record.id) {
            return Err(anyhow::anyhow!("Duplicate record id {}", record.id));
        }
        let mut storage_ids = HashSet::new();
        for storage in &record.storage_views {
            if !storage_ids.insert(storage.id) {
                return Err(anyhow::anyhow!(
                    "Duplicate storage id {} in record {}",
                    storage.id,
                    record.id
                ));
            }
        }
    }
    Ok(())
}

/// Reads a JSON array of records as returned by the remote API.
pub async fn load_records(json_path: &Path) -> Result<Vec<Record>> {
    let content = tokio::fs::read_to_string(json_path)
        .await
        .with_context(|| format!("Failed to read records file '{}'", json_path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse records JSON from '{}'", json_path.display()))?;
    check_unique_ids(&records)
        .with_context(|| format!("Invalid records snapshot '{}'", json_path.display()))?;
    info!(records = records.len(), path = %json_path.display(), "records loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv_file() -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{},{},Protein (g/100g),C (mg/100g),Iron (mg/100g),Origin", NAME_COL, KCAL_COL)?;
        writeln!(file, "Orange,47,0.9,53.2,0.1,Spain")?;
        writeln!(file, "Lentils,,9,1.5,3.3,Canada")?; // Missing kcal
        writeln!(file, ",10,10,10,10,Nowhere")?; // Empty name
        writeln!(file, "Mystery,text,1,,1,Unknown")?; // Invalid kcal, missing C
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_load_food_catalog_success() -> Result<()> {
        let file = create_test_csv_file()?;
        let catalog = load_food_catalog(file.path())?;

        assert_eq!(catalog.len(), 3);

        let orange = catalog.find("orange").unwrap();
        assert_eq!(orange.calories_per_100g, 47.0);
        assert_eq!(orange.nutrients_per_100g.get("C"), Some(&53.2));
        assert_eq!(orange.nutrients_per_100g.get("Protein"), Some(&0.9));
        assert_eq!(orange.nutrients_per_100g.len(), 3);

        let lentils = catalog.find("Lentils").unwrap();
        assert_eq!(lentils.calories_per_100g, 0.0);
        assert_eq!(lentils.nutrients_per_100g.get("Iron"), Some(&3.3));

        let mystery = catalog.find("Mystery").unwrap();
        assert_eq!(mystery.calories_per_100g, 0.0);
        assert!(mystery.nutrients_per_100g.get("C").is_none());

        Ok(())
    }

    #[test]
    fn test_load_food_catalog_missing_column() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{},Protein (g/100g)", NAME_COL)?;
        writeln!(file, "Orange,0.9")?;
        file.flush()?;

        let result = load_food_catalog(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(&format!("Column '{}' not found", KCAL_COL)));
        Ok(())
    }

    #[test]
    fn test_load_food_catalog_empty_file_with_headers() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{},{}", NAME_COL, KCAL_COL)?;
        file.flush()?;

        let result = load_food_catalog(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No valid food catalog data loaded"));
        Ok(())
    }

    #[test]
    fn test_load_food_catalog_file_not_found() {
        let path = Path::new("this_file_does_not_exist.csv");
        let result = load_food_catalog(path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Food catalog CSV file not found"));
    }

    #[tokio::test]
    async fn test_load_records() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"[{{"id": 1, "storageViews": [{{"id": 10}}, {{"id": 11}}]}}, {{"id": 2}}]"#
        )?;
        file.flush()?;

        let records = load_records(file.path()).await?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].storage_views.len(), 2);
        assert!(records[1].daily_intake_views.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_records_rejects_duplicate_ids() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, r#"[{{"id": 1}}, {{"id": 1}}]"#)?;
        file.flush()?;

        let err = load_records(file.path()).await.unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate record id 1"));
        Ok(())
    }

    #[test]
    fn test_check_unique_ids_nested_storages() {
        let records: Vec<Record> = serde_json::from_str(
            r#"[{"id": 1, "storageViews": [{"id": 5}, {"id": 5}]}]"#,
        )
        .unwrap();
        let err = check_unique_ids(&records).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate storage id 5 in record 1");

        // the same storage id under different records is fine
        let records: Vec<Record> = serde_json::from_str(
            r#"[{"id": 1, "storageViews": [{"id": 5}]}, {"id": 2, "storageViews": [{"id": 5}]}]"#,
        )
        .unwrap();
        assert!(check_unique_ids(&records).is_ok());
    }
}

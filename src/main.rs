use anyhow::{Context, Result};
use intake_tracker::cli::parse_args;
use intake_tracker::config::TrackerConfig;
use intake_tracker::data_loader::{load_food_catalog, load_records};
use intake_tracker::intake::{storage_report, FoodCatalog, StorageReport};
use intake_tracker::nutrients::NutrientType;
use intake_tracker::records::{find_record, find_storage};
use intake_tracker::view::{build_dashboard, DashboardReport, RecordDashboard};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_dashboard(dashboard: &RecordDashboard) {
    println!("Record {}", dashboard.record_id);
    for gauge in &dashboard.gauges {
        println!("  {:<14} {:>6.2}%", gauge.label, gauge.percent);
    }

    for section in &dashboard.sections {
        println!("\n{}", section.nutrient_type);
        for row in &section.rows {
            println!(
                "  {:<22} {:>10.2} / {:>10.2} {:<5} {:>6.2}%",
                row.label, row.consumed, row.max, row.unit, row.percent
            );
            match &row.caption {
                Some(caption) => println!("      {}", caption),
                None => println!("      Nothing is consumed!"),
            }
        }
    }

    if let Some(split) = &dashboard.macro_split {
        println!(
            "\nEnergy split: fat {:.2}%, carbohydrates {:.2}%, protein {:.2}%",
            split.fat, split.carbohydrates, split.protein
        );
    }

    for issue in &dashboard.issues {
        eprintln!("Data issue: {}", issue);
    }
}

fn print_storage(report: &StorageReport) {
    let name = if report.name.is_empty() { "(unnamed)" } else { report.name.as_str() };
    println!(
        "\nStorage {} {}: {} foods, {:.2} kcal",
        report.storage_id,
        name,
        report.foods.len(),
        report.totals.calories
    );
    for food in &report.foods {
        let marker = if food.from_catalog { "*" } else { " " };
        println!(
            "  {:<24}{} {:>7.1} g {:>8.2} kcal",
            food.name, marker, food.size, food.totals.calories
        );
    }
    for nutrient_type in NutrientType::ALL {
        for (info, amount) in report.totals.by_category(nutrient_type) {
            println!("  {:<24} {:>10.2} {}", info.display_name, amount, info.measurement);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = parse_args();
    let config = cli_args.apply_to(TrackerConfig::from_env());
    init_logging(&config.log_filter);

    let records = load_records(&config.records_path).await?;

    let catalog: Option<FoodCatalog> = match &config.food_catalog_path {
        Some(path) => Some(
            load_food_catalog(path)
                .with_context(|| format!("Failed to load food catalog from '{}'", path.display()))?,
        ),
        None => None,
    };

    let record = find_record(&records, cli_args.record_id)
        .ok_or_else(|| anyhow::anyhow!("Record {} not found; create or select a record first", cli_args.record_id))?;
    info!(record_id = record.id, storages = record.storage_views.len(), "record selected");

    let mut dashboard = build_dashboard(record);
    if !dashboard.issues.is_empty() {
        warn!(issues = dashboard.issues.len(), "record contains inconsistent nutrient data");
    }
    if let Some(category) = cli_args.category {
        dashboard.retain_category(category);
    }

    let storage = match cli_args.storage_id {
        Some(storage_id) => {
            let storage = find_storage(&records, record.id, storage_id).ok_or_else(|| {
                anyhow::anyhow!("Storage {} not found in record {}", storage_id, record.id)
            })?;
            Some(storage_report(storage, catalog.as_ref()))
        }
        None => None,
    };

    if cli_args.json {
        let report = DashboardReport { dashboard, storage };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_dashboard(&dashboard);
        if let Some(report) = &storage {
            print_storage(report);
        }
    }

    Ok(())
}

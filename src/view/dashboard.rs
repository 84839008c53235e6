use serde::Serialize;
use tracing::{debug, warn};

use super::charts::{bar_chart_series, macro_calorie_split, BarChartSeries, Gauge, MacroSplit};
use super::formatter::{to_display_row, DisplayRow};
use crate::errors::IntakeError;
use crate::intake::{category_summaries, compute_percentages, StorageReport};
use crate::nutrients::NutrientType;
use crate::records::{Record, RecordId};

const BREAKDOWN_TYPES: [NutrientType; 3] = [
    NutrientType::Vitamin,
    NutrientType::Mineral,
    NutrientType::Macronutrient,
];

/// Rows and chart series for one nutrient category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySection {
    pub nutrient_type: NutrientType,
    pub rows: Vec<DisplayRow>,
    pub chart: BarChartSeries,
}

/// Everything the record page renders, derived from one record snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDashboard {
    pub record_id: RecordId,
    pub gauges: Vec<Gauge>,
    pub sections: Vec<CategorySection>,
    pub macro_split: Option<MacroSplit>,
    /// Data-integrity problems found while building; affected widgets are left out.
    pub issues: Vec<String>,
}

impl RecordDashboard {
    pub fn gauge(&self, nutrient_type: NutrientType) -> Option<&Gauge> {
        self.gauges.iter().find(|g| g.nutrient_type == nutrient_type)
    }

    pub fn section(&self, nutrient_type: NutrientType) -> Option<&CategorySection> {
        self.sections.iter().find(|s| s.nutrient_type == nutrient_type)
    }

    /// Drops every widget outside `nutrient_type`; the energy split belongs to macronutrients.
    pub fn retain_category(&mut self, nutrient_type: NutrientType) {
        self.gauges.retain(|g| g.nutrient_type == nutrient_type);
        self.sections.retain(|s| s.nutrient_type == nutrient_type);
        if nutrient_type != NutrientType::Macronutrient {
            self.macro_split = None;
        }
    }
}

/// The single document printed in JSON mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub dashboard: RecordDashboard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageReport>,
}

struct IssueLog {
    record_id: RecordId,
    issues: Vec<String>,
}

impl IssueLog {
    /// Empty categories are expected and only noted; anything else is reported.
    fn note(&mut self, context: &str, err: IntakeError) {
        if err.is_recoverable() {
            debug!(record_id = self.record_id, %context, "{}", err);
            return;
        }
        warn!(record_id = self.record_id, %context, "{}", err);
        self.issues.push(format!("{}: {}", context, err));
    }
}

fn build_section(
    record: &Record,
    nutrient_type: NutrientType,
    log: &mut IssueLog,
) -> Result<CategorySection, IntakeError> {
    let percented = compute_percentages(&record.daily_intake_views, nutrient_type)?;
    if percented.is_empty() {
        return Err(IntakeError::EmptyCategory(nutrient_type));
    }

    let mut rows = Vec::with_capacity(percented.len());
    for nutrient in &percented {
        match to_display_row(nutrient) {
            Ok(row) => rows.push(row),
            Err(err) => log.note(&nutrient.name, err),
        }
    }
    let chart = bar_chart_series(&rows);
    Ok(CategorySection {
        nutrient_type,
        rows,
        chart,
    })
}

fn observed_grams(record: &Record, name: &str) -> Option<f64> {
    record
        .daily_intake_views
        .iter()
        .find(|obs| obs.nutrient_type == NutrientType::Macronutrient && obs.nutrient_name.eq_ignore_ascii_case(name))
        .map(|obs| obs.daily_consumed)
}

/// Builds gauges, per-category rows and the macronutrient split for `record`.
///
/// Never fails as a whole: empty categories are left out, corrupt ones are left out and
/// listed in `issues`.
pub fn build_dashboard(record: &Record) -> RecordDashboard {
    let mut log = IssueLog {
        record_id: record.id,
        issues: Vec::new(),
    };
    let mut gauges = Vec::new();
    let mut sections = Vec::new();

    for (nutrient_type, summary) in category_summaries(record) {
        match summary {
            Ok(summary) => gauges.push(Gauge::from(&summary)),
            Err(err) => log.note(&format!("{} gauge", nutrient_type), err),
        }
    }

    for nutrient_type in BREAKDOWN_TYPES {
        match build_section(record, nutrient_type, &mut log) {
            Ok(section) => sections.push(section),
            Err(err) => log.note(&format!("{} rows", nutrient_type), err),
        }
    }

    let fat = observed_grams(record, "Fat");
    let carbohydrates = observed_grams(record, "Carbohydrates");
    let protein = observed_grams(record, "Protein");
    let macro_split = if fat.is_some() || carbohydrates.is_some() || protein.is_some() {
        match macro_calorie_split(
            fat.unwrap_or(0.0),
            carbohydrates.unwrap_or(0.0),
            protein.unwrap_or(0.0),
        ) {
            Ok(split) => Some(split),
            Err(err) => {
                log.note("macro split", err);
                None
            }
        }
    } else {
        None
    };

    debug!(
        record_id = record.id,
        gauges = gauges.len(),
        sections = sections.len(),
        issues = log.issues.len(),
        "dashboard built"
    );

    RecordDashboard {
        record_id: record.id,
        gauges,
        sections,
        macro_split,
        issues: log.issues,
    }
}

use serde::Serialize;

use crate::errors::IntakeError;
use crate::intake::PercentedNutrient;
use crate::nutrients::NutrientType;

/// One bar-chart row as handed to the rendering widgets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub nutrient_type: NutrientType,
    pub percent: f64,
    pub consumed: f64,
    pub max: f64,
    pub unit: String,
    /// Render a call-to-action instead of an empty bar.
    pub nothing_consumed: bool,
    pub caption: Option<String>,
    pub info_path: Option<String>,
}

/// Unit abbreviation from a `"Name (unit)"` measurement string.
pub fn extract_unit(measurement: &str) -> Result<&str, IntakeError> {
    let mut rest = measurement;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let Some(close) = after.find(')') else { break };
        if close > 0 {
            return Ok(&after[..close]);
        }
        rest = after;
    }
    Err(IntakeError::MalformedMeasurement(measurement.to_string()))
}

/// `monounsaturatedFat` -> `monounsaturated Fat`.
pub fn split_camel_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    for c in identifier.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

fn consumed_caption(label: &str, nutrient_type: NutrientType, consumed: f64, unit: &str) -> String {
    let subject = if nutrient_type == NutrientType::Vitamin && !label.starts_with("Vitamin") {
        format!("Vitamin {}", label)
    } else {
        label.to_string()
    };
    format!("Consumed {} {} of {}.", consumed, unit.to_lowercase(), subject)
}

pub fn to_display_row(nutrient: &PercentedNutrient) -> Result<DisplayRow, IntakeError> {
    let unit = extract_unit(&nutrient.measurement)?.to_string();
    let label = split_camel_case(&nutrient.name);
    let nothing_consumed = nutrient.consumed == 0.0;
    let caption = (!nothing_consumed)
        .then(|| consumed_caption(&label, nutrient.nutrient_type, nutrient.consumed, &unit));
    let info_path = nutrient
        .nutrient_type
        .info_segment()
        .map(|segment| format!("/nutrientInfo/{}/{}", segment, nutrient.name));

    Ok(DisplayRow {
        name: nutrient.name.clone(),
        label,
        nutrient_type: nutrient.nutrient_type,
        percent: nutrient.percent,
        consumed: nutrient.consumed,
        max: nutrient.max,
        unit,
        nothing_consumed,
        caption,
        info_path,
    })
}

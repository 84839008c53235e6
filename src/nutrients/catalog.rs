use super::NutrientType;

const MCG: &str = "Micrograms (mcg)";
const MG: &str = "Milligrams (mg)";
const IU: &str = "International Units (IU)";
const G: &str = "Grams (g)";
const KCAL: &str = "Kilocalories (kcal)";

/// Static reference data for one tracked nutrient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientInfo {
    /// Identifier used by the remote API and the food catalog columns.
    pub key: &'static str,
    pub display_name: &'static str,
    pub nutrient_type: NutrientType,
    /// Unit description in the `"Name (unit)"` form.
    pub measurement: &'static str,
}

macro_rules! nutrient {
    ($key:expr, $display:expr, $ty:ident, $measurement:expr) => {
        NutrientInfo {
            key: $key,
            display_name: $display,
            nutrient_type: NutrientType::$ty,
            measurement: $measurement,
        }
    };
}

pub const NUTRIENT_CATALOG: &[NutrientInfo] = &[
    // Vitamins
    nutrient!("A", "Vitamin A", Vitamin, IU),
    nutrient!("D", "Vitamin D", Vitamin, IU),
    nutrient!("E", "Vitamin E", Vitamin, MG),
    nutrient!("K", "Vitamin K", Vitamin, MCG),
    nutrient!("C", "Vitamin C", Vitamin, MG),
    nutrient!("B1", "Vitamin B1", Vitamin, MG),
    nutrient!("B2", "Vitamin B2", Vitamin, MG),
    nutrient!("B3", "Vitamin B3", Vitamin, MG),
    nutrient!("B5", "Vitamin B5", Vitamin, MG),
    nutrient!("B6", "Vitamin B6", Vitamin, MCG),
    nutrient!("B7", "Vitamin B7", Vitamin, MCG),
    nutrient!("B9", "Vitamin B9", Vitamin, MCG),
    nutrient!("B12", "Vitamin B12", Vitamin, MCG),
    // Minerals
    nutrient!("Calcium", "Calcium", Mineral, MG),
    nutrient!("Phosphorus", "Phosphorus", Mineral, MG),
    nutrient!("Magnesium", "Magnesium", Mineral, MG),
    nutrient!("Sodium", "Sodium", Mineral, MG),
    nutrient!("Potassium", "Potassium", Mineral, MG),
    nutrient!("Chloride", "Chloride", Mineral, MG),
    nutrient!("Iron", "Iron", Mineral, MG),
    nutrient!("Zinc", "Zinc", Mineral, MG),
    nutrient!("Copper", "Copper", Mineral, MG),
    nutrient!("Manganese", "Manganese", Mineral, MG),
    nutrient!("Iodine", "Iodine", Mineral, MCG),
    nutrient!("Selenium", "Selenium", Mineral, MCG),
    nutrient!("Fluoride", "Fluoride", Mineral, MG),
    nutrient!("Chromium", "Chromium", Mineral, MCG),
    nutrient!("Molybdenum", "Molybdenum", Mineral, MCG),
    // Macronutrients
    nutrient!("Protein", "Protein", Macronutrient, G),
    nutrient!("Carbohydrates", "Carbohydrates", Macronutrient, G),
    nutrient!("Fiber", "Fiber", Macronutrient, G),
    nutrient!("Sugar", "Sugar", Macronutrient, G),
    nutrient!("Fat", "Fat", Macronutrient, G),
    nutrient!("transFat", "Trans Fat", Macronutrient, G),
    nutrient!("saturatedFat", "Saturated Fat", Macronutrient, G),
    nutrient!("polyunsaturatedFat", "Polyunsaturated Fat", Macronutrient, G),
    nutrient!("monounsaturatedFat", "Monounsaturated Fat", Macronutrient, G),
    // Energy
    nutrient!("Energy", "Calories", Calories, KCAL),
];

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds a nutrient by key or display name, ignoring case and whitespace.
///
/// `"C"`, `"Vitamin C"` and `"VitaminC"` all resolve to the same entry.
pub fn lookup(name: &str) -> Option<&'static NutrientInfo> {
    let wanted = normalize(name);
    if wanted.is_empty() {
        return None;
    }
    NUTRIENT_CATALOG
        .iter()
        .find(|info| normalize(info.key) == wanted || normalize(info.display_name) == wanted)
}

/// All catalog entries of one category, in catalog order.
pub fn by_type(nutrient_type: NutrientType) -> impl Iterator<Item = &'static NutrientInfo> {
    NUTRIENT_CATALOG
        .iter()
        .filter(move |info| info.nutrient_type == nutrient_type)
}

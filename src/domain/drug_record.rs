use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column order shared by the JSON and CSV outputs.
pub const SIMPLIFIED_COLUMNS: [&str; 8] = [
    "brand_name",
    "generic_name",
    "manufacturer_name",
    "product_type",
    "active_ingredients",
    "route",
    "substance_name",
    "application_number",
];

/// Top level of an openFDA drug download.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FdaDataset {
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Eight-field view of one source record. Values are carried over untouched,
/// whatever their JSON type; only absent fields take a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedDrugRecord {
    pub brand_name: Value,
    pub generic_name: Value,
    pub manufacturer_name: Value,
    pub product_type: Value,
    pub active_ingredients: Value,
    pub route: Value,
    pub substance_name: Value,
    pub application_number: Value,
}

impl Default for SimplifiedDrugRecord {
    fn default() -> Self {
        let empty = || Value::String(String::new());
        Self {
            brand_name: empty(),
            generic_name: empty(),
            manufacturer_name: empty(),
            product_type: empty(),
            active_ingredients: Value::Array(Vec::new()),
            route: empty(),
            substance_name: empty(),
            application_number: empty(),
        }
    }
}

impl SimplifiedDrugRecord {
    /// Projects one source record. Scalar fields default to `""` and
    /// `active_ingredients` to `[]` when the key is missing; a present value,
    /// `null` included, is kept as is. Anything that is not an object projects
    /// to an all-default record.
    pub fn project(source: &Value) -> Self {
        let defaults = Self::default();
        let Some(fields) = source.as_object() else {
            return defaults;
        };

        Self {
            brand_name: field(fields, "brand_name", defaults.brand_name),
            generic_name: field(fields, "generic_name", defaults.generic_name),
            manufacturer_name: field(fields, "manufacturer_name", defaults.manufacturer_name),
            product_type: field(fields, "product_type", defaults.product_type),
            active_ingredients: field(fields, "active_ingredients", defaults.active_ingredients),
            route: field(fields, "route", defaults.route),
            substance_name: field(fields, "substance_name", defaults.substance_name),
            application_number: field(fields, "application_number", defaults.application_number),
        }
    }

    /// Row in `SIMPLIFIED_COLUMNS` order. Strings are written as is, `null` as
    /// an empty cell, everything else as compact JSON.
    pub fn csv_row(&self) -> [String; 8] {
        [
            &self.brand_name,
            &self.generic_name,
            &self.manufacturer_name,
            &self.product_type,
            &self.active_ingredients,
            &self.route,
            &self.substance_name,
            &self.application_number,
        ]
        .map(csv_cell)
    }
}

impl FdaDataset {
    pub fn simplify(&self) -> Vec<SimplifiedDrugRecord> {
        self.results.iter().map(SimplifiedDrugRecord::project).collect()
    }
}

fn field(fields: &Map<String, Value>, name: &str, default: Value) -> Value {
    fields.get(name).cloned().unwrap_or(default)
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

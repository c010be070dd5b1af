use serde::{Deserialize, Serialize};

use super::eur_name::{kilojoules_to_kilocalories, EurName};

/// Nutrition facts for a single food, per 100 g of edible portion.
///
/// Field order is significant: it drives both the JSON key order and the
/// column order of the delimited output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionRecord {
    pub name: String,
    /// Kilocalories
    pub energy: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub protein: f64,
}

impl NutritionRecord {
    /// Column names, in serialization order.
    pub const FIELD_NAMES: [&'static str; 5] = ["name", "energy", "fat", "carbohydrate", "protein"];

    /// Creates a record with every nutrient defaulted to `0.0`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            energy: 0.0,
            fat: 0.0,
            carbohydrate: 0.0,
            protein: 0.0,
        }
    }

    /// Stores a raw value reported under `eur_name`.
    ///
    /// Energy arrives in kilojoules and is converted to kilocalories.
    pub fn set(&mut self, eur_name: EurName, raw_value: f64) {
        match eur_name {
            EurName::Energy => self.energy = kilojoules_to_kilocalories(raw_value),
            EurName::Fat => self.fat = raw_value,
            EurName::Protein => self.protein = raw_value,
            EurName::Carbohydrate => self.carbohydrate = raw_value,
        }
    }

    /// Field values rendered as text, in `FIELD_NAMES` order.
    pub fn field_values(&self) -> [String; 5] {
        [
            self.name.clone(),
            format_number(self.energy),
            format_number(self.fat),
            format_number(self.carbohydrate),
            format_number(self.protein),
        ]
    }
}

/// Shortest round-trip form, always with a decimal point (`9.0`, not `9`).
fn format_number(value: f64) -> String {
    format!("{:?}", value)
}

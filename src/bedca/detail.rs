//! Nutrition detail for a single food.

use std::str::FromStr;

use super::client::BedcaClient;
use super::error::BedcaError;
use super::xml;
use crate::models::{EurName, FoodRef, NutritionRecord};
use crate::template::RequestTemplate;

impl BedcaClient {
    /// Fetches the nutrition facts of `food`.
    ///
    /// Returns `Ok(None)` when the response carries no name for the food.
    pub async fn get_nutrition_facts(
        &self,
        template: &RequestTemplate,
        food: &FoodRef,
    ) -> Result<Option<NutritionRecord>, BedcaError> {
        tracing::info!("Getting nutrition facts for food \"{}\"", food.name);

        let response = self.query(template.render_id(food.id)).await?;
        let record = parse_nutrition_record(&response)?;
        if record.is_none() {
            tracing::debug!("No name in detail response for {}, skipping", food);
        }
        Ok(record)
    }
}

/// Parses a detail response.
///
/// Nutrients missing from the response, or reported without a value, stay at
/// `0.0`. Unrecognized `eur_name` codes are ignored.
pub fn parse_nutrition_record(text: &str) -> Result<Option<NutritionRecord>, BedcaError> {
    let doc = xml::parse(text)?;
    let response = xml::food_response(&doc)?;
    let food = xml::find(response, "food").ok_or(BedcaError::MissingElement("food"))?;

    // The name is kept verbatim; blank counts as missing
    let Some(name) = xml::find(food, "f_ori_name")
        .and_then(|n| n.text())
        .filter(|text| !text.trim().is_empty())
    else {
        return Ok(None);
    };

    let mut record = NutritionRecord::new(name);
    for foodvalue in xml::find_all(food, "foodvalue") {
        let Some(value) = xml::find_text(foodvalue, "best_location") else {
            continue;
        };
        let Some(eur_name) =
            xml::find_text(foodvalue, "eur_name").and_then(|code| EurName::from_str(code).ok())
        else {
            continue;
        };

        record.set(eur_name, xml::parse_number("best_location", value)?);
    }

    Ok(Some(record))
}

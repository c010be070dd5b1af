//! Food index: every food in the database, discovered letter by letter.

use std::collections::HashSet;

use roxmltree::Node;

use super::client::BedcaClient;
use super::error::BedcaError;
use super::xml;
use crate::models::FoodRef;
use crate::template::RequestTemplate;

/// Letters queried, in order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

impl BedcaClient {
    /// Lists all foods, querying one letter at a time.
    ///
    /// Foods keep encounter order: letters alphabetically, then document order
    /// within each response. Fails if any id appears more than once.
    pub async fn list_foods(&self, template: &RequestTemplate) -> Result<Vec<FoodRef>, BedcaError> {
        let mut foods = Vec::new();

        for letter in ALPHABET.chars() {
            tracing::info!("Getting foods starting by {}", letter.to_ascii_uppercase());

            let response = self.query(template.render_letter(letter)).await?;
            let page = parse_food_index(&response)?;
            tracing::debug!("Found {} food(s) for {}", page.len(), letter);
            foods.extend(page);
        }

        check_unique_ids(&foods)?;
        Ok(foods)
    }
}

/// Parses one index response into `(id, name)` pairs.
///
/// Every `<food>` must carry both `<f_id>` and `<f_ori_name>`.
pub fn parse_food_index(text: &str) -> Result<Vec<FoodRef>, BedcaError> {
    let doc = xml::parse(text)?;
    let response = xml::food_response(&doc)?;

    xml::find_all(response, "food").map(parse_food).collect()
}

fn parse_food(food: Node<'_, '_>) -> Result<FoodRef, BedcaError> {
    let id = xml::find_text(food, "f_id").ok_or(BedcaError::MissingElement("f_id"))?;
    let id = xml::parse_number("f_id", id)?;
    let name = xml::find(food, "f_ori_name")
        .ok_or(BedcaError::MissingElement("f_ori_name"))?
        .text()
        .unwrap_or_default()
        .trim();
    Ok(FoodRef::new(id, name))
}

/// Rejects a food list in which any id occurs more than once.
pub fn check_unique_ids(foods: &[FoodRef]) -> Result<(), BedcaError> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for food in foods {
        if !seen.insert(food.id) && !duplicates.contains(&food.id) {
            duplicates.push(food.id);
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(BedcaError::DuplicateFoodIds(duplicates))
    }
}

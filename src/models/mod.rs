mod eur_name;
mod food_ref;
mod nutrition_record;

pub use eur_name::EurName;
pub use food_ref::FoodRef;
pub use nutrition_record::NutritionRecord;

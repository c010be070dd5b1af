use std::fmt;
use std::str::FromStr;

/// Kilojoules in one kilocalorie.
pub const KJ_PER_KCAL: f64 = 4.184;

/// Nutrient codes from a detail response that end up in a `NutritionRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EurName {
    Energy,
    Fat,
    Protein,
    Carbohydrate,
}

impl EurName {
    pub fn code(&self) -> &'static str {
        match self {
            EurName::Energy => "ENERC",
            EurName::Fat => "FAT",
            EurName::Protein => "PROT",
            EurName::Carbohydrate => "CHO",
        }
    }
}

impl fmt::Display for EurName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for EurName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ENERC" => Ok(EurName::Energy),
            "FAT" => Ok(EurName::Fat),
            "PROT" => Ok(EurName::Protein),
            "CHO" => Ok(EurName::Carbohydrate),
            _ => Err(format!("Unrecognized EUR name '{}'", s)),
        }
    }
}

/// Converts kilojoules to kilocalories, rounded to 2 decimal places.
pub fn kilojoules_to_kilocalories(kj: f64) -> f64 {
    round2(kj / KJ_PER_KCAL)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

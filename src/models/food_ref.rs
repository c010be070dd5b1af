use std::fmt;

/// A food discovered in the alphabetical index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodRef {
    pub id: i64,
    pub name: String,
}

impl FoodRef {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for FoodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Nutrients {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Nutrients {
    /// All values finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.fat, self.carbs]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// A catalog recipe. Field names follow the catalog JSON format (`imageUrl`,
/// `prepTime`, `cookTime`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub image_url: String,
    pub nutrients: Nutrients,
    pub prep_time: u32,
    pub cook_time: u32,
}

impl Recipe {
    /// Minutes from start to table, saturating at `u32::MAX`.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

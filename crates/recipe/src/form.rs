use std::borrow::Cow;

use mealboard_shared::{Ingredient, Nutrients, Recipe};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::PLACEHOLDER_IMAGE_URL;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IngredientInput {
    #[validate(length(min = 1, message = "Ingredient name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Quantity is required"))]
    pub quantity: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NutrientsInput {
    #[validate(range(min = 0.0, message = "Calories must be a positive number"))]
    #[serde(default)]
    pub calories: f64,

    #[validate(range(min = 0.0, message = "Protein must be a positive number"))]
    #[serde(default)]
    pub protein: f64,

    #[validate(range(min = 0.0, message = "Fat must be a positive number"))]
    #[serde(default)]
    pub fat: f64,

    #[validate(range(min = 0.0, message = "Carbs must be a positive number"))]
    #[serde(default)]
    pub carbs: f64,
}

/// Recipe-creation form.
///
/// `instructions` is free text with one step per line; blank lines are
/// dropped when the recipe is built.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipeForm {
    #[validate(length(min = 3, message = "Recipe name must be at least 3 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,

    #[serde(default)]
    pub prep_time: u32,

    #[serde(default)]
    pub cook_time: u32,

    #[validate(
        length(min = 1, message = "At least one ingredient is required"),
        nested
    )]
    pub ingredients: Vec<IngredientInput>,

    #[validate(custom(function = "validate_instructions"))]
    pub instructions: String,

    #[validate(nested)]
    #[serde(default)]
    pub nutrients: NutrientsInput,
}

fn validate_instructions(instructions: &str) -> Result<(), ValidationError> {
    if instructions.trim().is_empty() {
        return Err(ValidationError::new("instructions_required")
            .with_message(Cow::from("Instructions are required")));
    }

    Ok(())
}

impl NewRecipeForm {
    /// Validates the form and builds a recipe with a fresh id and a
    /// placeholder image.
    pub fn accept(self) -> mealboard_shared::Result<Recipe> {
        self.validate()?;

        let recipe = Recipe {
            id: ulid::Ulid::new().to_string(),
            name: self.name.trim().to_owned(),
            category: self.category.trim().to_owned(),
            description: self.description.trim().to_owned(),
            ingredients: self
                .ingredients
                .into_iter()
                .map(|i| Ingredient::new(i.name.trim(), i.quantity.trim()))
                .collect(),
            instructions: self
                .instructions
                .lines()
                .map(str::trim)
                .filter(|step| !step.is_empty())
                .map(str::to_owned)
                .collect(),
            image_url: PLACEHOLDER_IMAGE_URL.to_owned(),
            nutrients: Nutrients {
                calories: self.nutrients.calories,
                protein: self.nutrients.protein,
                fat: self.nutrients.fat,
                carbs: self.nutrients.carbs,
            },
            prep_time: self.prep_time,
            cook_time: self.cook_time,
        };

        tracing::info!(recipe_id = %recipe.id, name = %recipe.name, "Recipe form accepted");

        Ok(recipe)
    }
}

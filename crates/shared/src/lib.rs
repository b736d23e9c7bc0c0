mod error;
pub mod mealplan;
pub mod recipe;

pub use error::*;
pub use mealplan::{Day, MealSlot, parse_slot};
pub use recipe::{Ingredient, Nutrients, Recipe};

use mealboard_mealplan::PlannerGrid;
use mealboard_shared::Ingredient;
use serde::Serialize;

/// Flattened ingredient list derived from a planner.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ShoppingList {
    pub items: Vec<Ingredient>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn to_downloadable_text(&self) -> String {
        crate::to_downloadable_text(&self.items)
    }
}

/// Shopping List Aggregator
///
/// Stateless service that flattens the ingredients of every planned recipe
/// into a single list.
///
/// Traversal is Monday to Sunday, Breakfast to Dinner within a day, and
/// recipe order within a meal. Repeated ingredients and repeated recipes are
/// listed once per occurrence: quantities are free text in heterogeneous
/// units ("2", "1 cup", "a pinch") and are never merged.
pub struct ShoppingListAggregator;

impl ShoppingListAggregator {
    pub fn compute(grid: &PlannerGrid) -> ShoppingList {
        let items = grid
            .meals()
            .flat_map(|(_, _, recipe)| recipe.ingredients.iter().cloned())
            .collect();

        ShoppingList { items }
    }
}

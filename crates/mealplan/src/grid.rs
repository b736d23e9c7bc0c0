use std::collections::BTreeMap;
use std::sync::Arc;

use mealboard_shared::{Day, MealSlot, Recipe};
use serde::Serialize;

/// One occupied slot of the weekly grid.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PlannedMeal {
    pub day: Day,
    pub slot: MealSlot,
    pub recipe: Arc<Recipe>,
}

/// Weekly meal planner for a single session.
///
/// Recipes are shared with the catalog through `Arc`, so placing the same
/// recipe in several slots never copies it and clearing one slot leaves the
/// others untouched.
///
/// Placing a recipe is a two-step protocol: [`PlannerGrid::select_recipe`]
/// stores a pending selection and [`PlannerGrid::assign`] consumes it.
///
/// A day with no occupied slot is never kept as an empty entry.
#[derive(Clone, Debug, Default)]
pub struct PlannerGrid {
    days: BTreeMap<Day, BTreeMap<MealSlot, Arc<Recipe>>>,
    pending: Option<Arc<Recipe>>,
}

impl PlannerGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pending selection. The last selection wins.
    pub fn select_recipe(&mut self, recipe: Arc<Recipe>) {
        tracing::debug!(recipe_id = %recipe.id, "recipe selected");
        self.pending = Some(recipe);
    }

    pub fn pending(&self) -> Option<&Arc<Recipe>> {
        self.pending.as_ref()
    }

    /// Places the pending recipe into `(day, slot)`, overwriting any previous
    /// occupant, and clears the selection.
    ///
    /// Returns `None` without touching the grid when nothing is pending.
    pub fn assign(&mut self, day: Day, slot: MealSlot) -> Option<Arc<Recipe>> {
        let recipe = self.pending.take()?;

        let previous = self
            .days
            .entry(day)
            .or_default()
            .insert(slot, Arc::clone(&recipe));

        tracing::debug!(
            %day,
            %slot,
            recipe_id = %recipe.id,
            replaced = previous.is_some(),
            "recipe assigned"
        );

        Some(recipe)
    }

    /// Empties `(day, slot)` and returns its previous occupant.
    pub fn clear(&mut self, day: Day, slot: MealSlot) -> Option<Arc<Recipe>> {
        let meals = self.days.get_mut(&day)?;
        let removed = meals.remove(&slot);

        if meals.is_empty() {
            self.days.remove(&day);
        }

        if let Some(recipe) = &removed {
            tracing::debug!(%day, %slot, recipe_id = %recipe.id, "slot cleared");
        }

        removed
    }

    pub fn get(&self, day: Day, slot: MealSlot) -> Option<&Arc<Recipe>> {
        self.days.get(&day).and_then(|meals| meals.get(&slot))
    }

    /// Occupied slots in day order, then meal-slot order.
    pub fn meals(&self) -> impl Iterator<Item = (Day, MealSlot, &Arc<Recipe>)> + '_ {
        self.days.iter().flat_map(|(day, meals)| {
            meals
                .iter()
                .map(move |(slot, recipe)| (*day, *slot, recipe))
        })
    }

    pub fn snapshot(&self) -> Vec<PlannedMeal> {
        self.meals()
            .map(|(day, slot, recipe)| PlannedMeal {
                day,
                slot,
                recipe: Arc::clone(recipe),
            })
            .collect()
    }

    /// Days holding at least one meal.
    pub fn planned_days(&self) -> impl Iterator<Item = Day> + '_ {
        self.days.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.days.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealboard_shared::{Ingredient, Nutrients};

    fn recipe(id: &str) -> Arc<Recipe> {
        Arc::new(Recipe {
            id: id.to_owned(),
            name: format!("Recipe {id}"),
            category: "Dinner".to_owned(),
            description: "A test recipe".to_owned(),
            ingredients: vec![Ingredient::new("Salt", "1 pinch")],
            instructions: vec!["Cook".to_owned()],
            image_url: String::new(),
            nutrients: Nutrients::default(),
            prep_time: 0,
            cook_time: 0,
        })
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = PlannerGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.len(), 0);
        assert!(grid.pending().is_none());
        assert!(grid.snapshot().is_empty());
    }

    #[test]
    fn test_assign_consumes_pending_selection() {
        let mut grid = PlannerGrid::new();
        grid.select_recipe(recipe("a"));

        let assigned = grid.assign(Day::Monday, MealSlot::Lunch).unwrap();

        assert_eq!(assigned.id, "a");
        assert!(grid.pending().is_none());
        assert_eq!(grid.get(Day::Monday, MealSlot::Lunch).unwrap().id, "a");
    }

    #[test]
    fn test_assign_overwrites_occupant() {
        let mut grid = PlannerGrid::new();
        grid.select_recipe(recipe("a"));
        grid.assign(Day::Friday, MealSlot::Dinner);
        grid.select_recipe(recipe("b"));
        grid.assign(Day::Friday, MealSlot::Dinner);

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get(Day::Friday, MealSlot::Dinner).unwrap().id, "b");
    }

    #[test]
    fn test_clear_prunes_empty_day() {
        let mut grid = PlannerGrid::new();
        grid.select_recipe(recipe("a"));
        grid.assign(Day::Tuesday, MealSlot::Breakfast);
        grid.select_recipe(recipe("b"));
        grid.assign(Day::Tuesday, MealSlot::Dinner);

        grid.clear(Day::Tuesday, MealSlot::Breakfast);
        assert_eq!(grid.planned_days().collect::<Vec<_>>(), vec![Day::Tuesday]);

        let removed = grid.clear(Day::Tuesday, MealSlot::Dinner).unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(grid.planned_days().count(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_clear_empty_slot_is_noop() {
        let mut grid = PlannerGrid::new();
        assert!(grid.clear(Day::Sunday, MealSlot::Lunch).is_none());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_clear_does_not_touch_pending() {
        let mut grid = PlannerGrid::new();
        grid.select_recipe(recipe("a"));
        grid.clear(Day::Monday, MealSlot::Breakfast);
        assert_eq!(grid.pending().unwrap().id, "a");
    }
}

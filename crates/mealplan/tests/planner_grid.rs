use std::sync::Arc;

use mealboard_mealplan::{PlannedMeal, PlannerGrid};
use mealboard_shared::{Day, Ingredient, MealSlot, Nutrients, Recipe};

fn recipe(id: &str, ingredients: &[(&str, &str)]) -> Arc<Recipe> {
    Arc::new(Recipe {
        id: id.to_owned(),
        name: format!("Recipe {id}"),
        category: "Dinner".to_owned(),
        description: "Integration test recipe".to_owned(),
        ingredients: ingredients
            .iter()
            .map(|(name, quantity)| Ingredient::new(*name, *quantity))
            .collect(),
        instructions: vec!["Mix".to_owned()],
        image_url: "https://placehold.co/600x400.png".to_owned(),
        nutrients: Nutrients::default(),
        prep_time: 5,
        cook_time: 10,
    })
}

/// Small deterministic generator so operation sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

fn assert_no_empty_days(grid: &PlannerGrid) {
    for day in grid.planned_days() {
        assert!(
            SLOTS
                .iter()
                .any(|slot| grid.get(day, *slot).is_some()),
            "{day} is present without any meal"
        );
    }
}

const SLOTS: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

const DAYS: [Day; 7] = [
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
    Day::Saturday,
    Day::Sunday,
];

#[test]
fn test_pruning_invariant_holds_for_random_sequences() {
    let recipes = [recipe("a", &[]), recipe("b", &[]), recipe("c", &[])];

    for seed in 0..50 {
        let mut rng = Lcg(seed);
        let mut grid = PlannerGrid::new();

        for _ in 0..200 {
            let day = DAYS[rng.next(DAYS.len())];
            let slot = SLOTS[rng.next(3)];

            match rng.next(3) {
                0 => grid.select_recipe(Arc::clone(&recipes[rng.next(recipes.len())])),
                1 => {
                    grid.assign(day, slot);
                }
                _ => {
                    grid.clear(day, slot);
                }
            }

            assert_no_empty_days(&grid);
            assert_eq!(grid.len(), grid.snapshot().len());
        }
    }
}

#[test]
fn test_assign_without_pending_selection_leaves_grid_unchanged() {
    let mut grid = PlannerGrid::new();
    grid.select_recipe(recipe("a", &[]));
    grid.assign(Day::Monday, MealSlot::Breakfast);

    let before = grid.snapshot();
    assert!(grid.assign(Day::Wednesday, MealSlot::Lunch).is_none());
    assert!(grid.assign(Day::Monday, MealSlot::Breakfast).is_none());

    assert_eq!(grid.snapshot(), before);
}

#[test]
fn test_last_selection_wins() {
    let mut grid = PlannerGrid::new();
    grid.select_recipe(recipe("a", &[]));
    grid.select_recipe(recipe("b", &[]));
    grid.assign(Day::Thursday, MealSlot::Dinner);

    assert_eq!(grid.get(Day::Thursday, MealSlot::Dinner).unwrap().id, "b");
    assert!(grid.pending().is_none());
}

#[test]
fn test_clear_twice_equals_clear_once() {
    let mut grid = PlannerGrid::new();
    grid.select_recipe(recipe("a", &[]));
    grid.assign(Day::Monday, MealSlot::Lunch);
    grid.select_recipe(recipe("b", &[]));
    grid.assign(Day::Monday, MealSlot::Dinner);

    grid.clear(Day::Monday, MealSlot::Lunch);
    let once = grid.snapshot();
    grid.clear(Day::Monday, MealSlot::Lunch);

    assert_eq!(grid.snapshot(), once);
}

#[test]
fn test_shared_recipe_survives_clearing_another_slot() {
    let shared = recipe("pasta", &[("Pasta", "200 g")]);
    let mut grid = PlannerGrid::new();

    grid.select_recipe(Arc::clone(&shared));
    grid.assign(Day::Monday, MealSlot::Dinner);
    grid.select_recipe(Arc::clone(&shared));
    grid.assign(Day::Wednesday, MealSlot::Lunch);

    grid.clear(Day::Monday, MealSlot::Dinner);

    let kept = grid.get(Day::Wednesday, MealSlot::Lunch).unwrap();
    assert_eq!(kept.id, "pasta");
    assert_eq!(kept.ingredients, vec![Ingredient::new("Pasta", "200 g")]);
    assert_eq!(grid.planned_days().collect::<Vec<_>>(), vec![Day::Wednesday]);
}

#[test]
fn test_snapshot_is_in_day_then_slot_order() {
    let mut grid = PlannerGrid::new();
    let placements = [
        (Day::Sunday, MealSlot::Breakfast, "d"),
        (Day::Monday, MealSlot::Dinner, "b"),
        (Day::Monday, MealSlot::Breakfast, "a"),
        (Day::Friday, MealSlot::Lunch, "c"),
    ];

    for (day, slot, id) in placements {
        grid.select_recipe(recipe(id, &[]));
        grid.assign(day, slot);
    }

    let order: Vec<(Day, MealSlot, String)> = grid
        .snapshot()
        .into_iter()
        .map(|PlannedMeal { day, slot, recipe }| (day, slot, recipe.id.clone()))
        .collect();

    assert_eq!(
        order,
        vec![
            (Day::Monday, MealSlot::Breakfast, "a".to_owned()),
            (Day::Monday, MealSlot::Dinner, "b".to_owned()),
            (Day::Friday, MealSlot::Lunch, "c".to_owned()),
            (Day::Sunday, MealSlot::Breakfast, "d".to_owned()),
        ]
    );
}

#[test]
fn test_snapshot_serializes_day_and_slot_names() {
    let mut grid = PlannerGrid::new();
    grid.select_recipe(recipe("a", &[]));
    grid.assign(Day::Saturday, MealSlot::Lunch);

    let json = serde_json::to_value(grid.snapshot()).unwrap();
    assert_eq!(json[0]["day"], "Saturday");
    assert_eq!(json[0]["slot"], "Lunch");
    assert_eq!(json[0]["recipe"]["id"], "a");
}

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use mealboard_shared::{Recipe, bail};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "data/"]
struct SeedData;

const SEED_FILE: &str = "recipes.json";

/// Category value matching every recipe in [`Catalog::filter`].
pub const ALL_CATEGORIES: &str = "all";

/// Read-only recipe library, loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    recipes: Vec<Arc<Recipe>>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and negative nutrients.
    pub fn new(recipes: Vec<Recipe>) -> mealboard_shared::Result<Self> {
        let mut seen = HashSet::new();

        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                bail!("duplicate recipe id '{}'", recipe.id);
            }
            if !recipe.nutrients.is_valid() {
                bail!("recipe '{}' has negative nutrient values", recipe.id);
            }
        }

        Ok(Self {
            recipes: recipes.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn from_json(json: &[u8]) -> mealboard_shared::Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_slice(json)?;
        Self::new(recipes)
    }

    /// Recipes bundled with the binary.
    pub fn seed() -> mealboard_shared::Result<Self> {
        let Some(file) = SeedData::get(SEED_FILE) else {
            bail!("embedded seed catalog '{SEED_FILE}' is missing");
        };

        Self::from_json(&file.data)
    }

    /// Loads the catalog file at `path`, or the embedded seed when `None`.
    pub fn load(path: Option<&Path>) -> mealboard_shared::Result<Self> {
        let catalog = match path {
            Some(path) => Self::from_json(&std::fs::read(path)?)?,
            None => Self::seed()?,
        };

        tracing::info!(
            recipes = catalog.len(),
            source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_owned()),
            "Recipe catalog loaded"
        );

        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Recipe>> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn all(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// `"all"` followed by each category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut categories = vec![ALL_CATEGORIES.to_owned()];

        for recipe in &self.recipes {
            if seen.insert(recipe.category.as_str()) {
                categories.push(recipe.category.clone());
            }
        }

        categories
    }

    /// Recipes whose name contains `search` (case-insensitive) and whose
    /// category equals `category`, in catalog order.
    pub fn filter(&self, search: Option<&str>, category: Option<&str>) -> Vec<Arc<Recipe>> {
        let search = search.map(str::to_lowercase).unwrap_or_default();
        let category = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);

        self.recipes
            .iter()
            .filter(|recipe| category.is_none_or(|c| recipe.category == c))
            .filter(|recipe| recipe.name.to_lowercase().contains(&search))
            .cloned()
            .collect()
    }
}

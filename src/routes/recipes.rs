use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::Query;
use mealboard_recipe::NewRecipeForm;
use mealboard_shared::Recipe;
use serde::Deserialize;

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct RecipeQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// GET /recipes - Library listing. Images are never generated here.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RecipeQuery>,
) -> Json<Vec<Arc<Recipe>>> {
    Json(
        state
            .catalog
            .filter(query.search.as_deref(), query.category.as_deref()),
    )
}

pub async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.categories())
}

/// GET /recipes/{id} - Recipe detail with a generated image in place of a
/// placeholder when the assistant can provide one.
#[tracing::instrument(skip_all, fields(recipe_id = %id))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = state
        .catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("recipe '{id}'")))?;

    let image_url = mealboard_ai::resolve_recipe_image(state.assistant.as_ref(), &recipe).await;

    let mut detail = Recipe::clone(&recipe);
    detail.image_url = image_url;

    Ok(Json(detail))
}

/// POST /recipes - Validates a submitted recipe. The catalog is read-only,
/// so the accepted recipe is echoed back without being stored.
#[tracing::instrument(skip_all)]
pub async fn create(
    Json(form): Json<NewRecipeForm>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    let recipe = form.accept()?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

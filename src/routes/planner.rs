use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use mealboard_mealplan::{PlannedMeal, PlannerGrid};
use mealboard_shared::{Recipe, parse_slot};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, routes::AppState, session::SessionId};

#[derive(Debug, Serialize)]
pub struct PlannerView {
    pub pending: Option<Arc<Recipe>>,
    pub meals: Vec<PlannedMeal>,
}

impl From<&PlannerGrid> for PlannerView {
    fn from(grid: &PlannerGrid) -> Self {
        Self {
            pending: grid.pending().cloned(),
            meals: grid.snapshot(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectInput {
    pub recipe_id: String,
}

pub async fn view(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<PlannerView> {
    Json(state.sessions.read(&session, |grid| PlannerView::from(grid)).await)
}

#[tracing::instrument(skip_all, fields(session = %session.0, recipe_id = %input.recipe_id))]
pub async fn select(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Json(input): Json<SelectInput>,
) -> Result<Json<PlannerView>, AppError> {
    let recipe = state
        .catalog
        .get(&input.recipe_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("recipe '{}'", input.recipe_id)))?;

    let view = state
        .sessions
        .with_grid(&session, |grid| {
            grid.select_recipe(recipe);
            PlannerView::from(&*grid)
        })
        .await;

    Ok(Json(view))
}

/// PUT /planner/{day}/{slot} - Places the pending recipe. Without a pending
/// selection the planner is returned unchanged.
#[tracing::instrument(skip_all, fields(session = %session.0, day = %day, slot = %slot))]
pub async fn assign(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path((day, slot)): Path<(String, String)>,
) -> Result<Json<PlannerView>, AppError> {
    let (day, slot) = parse_slot(&day, &slot)?;

    let view = state
        .sessions
        .with_grid(&session, |grid| {
            if grid.assign(day, slot).is_none() {
                tracing::debug!("No pending recipe, assignment ignored");
            }
            PlannerView::from(&*grid)
        })
        .await;

    Ok(Json(view))
}

#[tracing::instrument(skip_all, fields(session = %session.0, day = %day, slot = %slot))]
pub async fn clear(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path((day, slot)): Path<(String, String)>,
) -> Result<Json<PlannerView>, AppError> {
    let (day, slot) = parse_slot(&day, &slot)?;

    let view = state
        .sessions
        .with_grid(&session, |grid| {
            grid.clear(day, slot);
            PlannerView::from(&*grid)
        })
        .await;

    Ok(Json(view))
}

use axum::{Json, extract::State};
use mealboard_ai::{
    ActionResponse, GeneratedImage, ImageRequest, SuggestionForm, SuggestionRequest, Suggestions,
};

use crate::{error::AppError, routes::AppState};

/// POST /suggestions - Blank preferences are sent as "None". Assistant
/// failures come back as `success: false` with a 200 status.
#[tracing::instrument(skip_all)]
pub async fn suggest(
    State(state): State<AppState>,
    Json(form): Json<SuggestionForm>,
) -> Result<Json<ActionResponse<Suggestions>>, AppError> {
    let request = SuggestionRequest::from_form(form)?;

    Ok(Json(
        mealboard_ai::get_recipe_suggestions(state.assistant.as_ref(), request).await,
    ))
}

#[tracing::instrument(skip_all)]
pub async fn image(
    State(state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> Json<ActionResponse<GeneratedImage>> {
    Json(mealboard_ai::get_generated_image(state.assistant.as_ref(), request).await)
}

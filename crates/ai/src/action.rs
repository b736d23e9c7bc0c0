use serde::{Deserialize, Serialize};

use crate::{GeneratedImage, ImageRequest, RecipeAssistant, SuggestionRequest, Suggestions};

pub const SUGGESTIONS_FAILED: &str = "Failed to get recipe suggestions from AI.";
pub const IMAGE_FAILED: &str = "Failed to generate image.";

/// `{success, data?, error?}` envelope returned by the AI actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse<T> {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Asks the assistant for suggestions. Failures are logged and reported as a
/// generic message; there is no retry.
pub async fn get_recipe_suggestions(
    assistant: &dyn RecipeAssistant,
    request: SuggestionRequest,
) -> ActionResponse<Suggestions> {
    match assistant.suggest_recipes(request).await {
        Ok(suggestions) => ActionResponse::ok(suggestions),
        Err(e) => {
            tracing::error!(error = %e, "Error in get_recipe_suggestions");
            ActionResponse::failure(SUGGESTIONS_FAILED)
        }
    }
}

pub async fn get_generated_image(
    assistant: &dyn RecipeAssistant,
    request: ImageRequest,
) -> ActionResponse<GeneratedImage> {
    match assistant.generate_image(request).await {
        Ok(image) => ActionResponse::ok(image),
        Err(e) => {
            tracing::error!(error = %e, "Error in get_generated_image");
            ActionResponse::failure(IMAGE_FAILED)
        }
    }
}

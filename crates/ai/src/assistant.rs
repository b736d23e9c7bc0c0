use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{AiError, AiResult};

/// Value sent for optional preferences the user left blank.
pub const UNSPECIFIED: &str = "None";

/// Suggestion form as submitted by the user.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionForm {
    #[serde(default)]
    pub dietary_restrictions: Option<String>,

    #[validate(length(min = 1, message = "Please list at least one ingredient."))]
    pub available_ingredients: String,

    #[serde(default)]
    pub health_goals: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub dietary_restrictions: String,
    pub available_ingredients: String,
    pub health_goals: String,
}

impl SuggestionRequest {
    /// Validates the form and fills blank preferences with `"None"`.
    pub fn from_form(form: SuggestionForm) -> mealboard_shared::Result<Self> {
        form.validate()?;

        let or_unspecified = |value: Option<String>| {
            value
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| UNSPECIFIED.to_owned())
        };

        Ok(Self {
            dietary_restrictions: or_unspecified(form.dietary_restrictions),
            available_ingredients: form.available_ingredients.trim().to_owned(),
            health_goals: or_unspecified(form.health_goals),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    pub recipes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub image_url: String,
}

/// Hosted generative model used for recipe suggestions and recipe images.
#[async_trait::async_trait]
pub trait RecipeAssistant: Send + Sync {
    async fn suggest_recipes(&self, request: SuggestionRequest) -> AiResult<Suggestions>;

    async fn generate_image(&self, request: ImageRequest) -> AiResult<GeneratedImage>;
}

/// Assistant used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAssistant;

#[async_trait::async_trait]
impl RecipeAssistant for DisabledAssistant {
    async fn suggest_recipes(&self, _request: SuggestionRequest) -> AiResult<Suggestions> {
        Err(AiError::NotConfigured)
    }

    async fn generate_image(&self, _request: ImageRequest) -> AiResult<GeneratedImage> {
        Err(AiError::NotConfigured)
    }
}

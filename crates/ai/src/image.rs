use mealboard_recipe::is_placeholder_image;
use mealboard_shared::Recipe;

use crate::{ImageRequest, RecipeAssistant};

/// Image URL to display for `recipe` on its detail view.
///
/// Placeholder images are replaced by a generated image prompted with the
/// recipe name; when generation fails the placeholder is kept. Real image
/// URLs are returned as-is without calling the assistant.
pub async fn resolve_recipe_image(assistant: &dyn RecipeAssistant, recipe: &Recipe) -> String {
    if !is_placeholder_image(&recipe.image_url) {
        return recipe.image_url.clone();
    }

    let request = ImageRequest {
        prompt: recipe.name.clone(),
    };

    match assistant.generate_image(request).await {
        Ok(image) => image.image_url,
        Err(e) => {
            tracing::warn!(
                recipe_id = %recipe.id,
                error = %e,
                "Image generation failed, keeping placeholder"
            );
            recipe.image_url.clone()
        }
    }
}

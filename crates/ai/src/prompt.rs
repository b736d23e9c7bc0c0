use crate::SuggestionRequest;

pub fn suggestion_prompt(request: &SuggestionRequest) -> String {
    format!(
        "You are a recipe suggestion AI. Given the following dietary restrictions, \
         available ingredients, and health goals, suggest a list of recipes.\n\n\
         Dietary Restrictions: {}\n\
         Available Ingredients: {}\n\
         Health Goals: {}\n\n\
         Recipes:",
        request.dietary_restrictions, request.available_ingredients, request.health_goals
    )
}

pub fn image_prompt(prompt: &str) -> String {
    format!("A professional, appetizing food photograph of {prompt}, plated and well lit.")
}

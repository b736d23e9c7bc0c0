mod wire;

use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde_json::json;

use crate::{
    AiError, AiResult, GeneratedImage, ImageRequest, RecipeAssistant, SuggestionRequest,
    Suggestions, image_prompt, suggestion_prompt,
};
use wire::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};

#[derive(Debug, Clone)]
pub struct GenerativeConfig {
    pub api_key: String,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout: Duration,
}

/// [`RecipeAssistant`] backed by a Gemini-compatible `generateContent` API.
#[derive(Debug, Clone)]
pub struct GenerativeClient {
    http: Client,
    config: GenerativeConfig,
}

impl GenerativeClient {
    pub fn new(config: GenerativeConfig) -> AiResult<Self> {
        if config.api_key.is_empty() {
            return Err(AiError::NotConfigured);
        }

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { http, config })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> AiResult<GenerateContentResponse> {
        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<GenerateContentResponse>().await?)
        } else {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(AiError::Api { status, body })
        }
    }
}

#[async_trait::async_trait]
impl RecipeAssistant for GenerativeClient {
    #[tracing::instrument(skip(self, request), fields(model = %self.config.text_model))]
    async fn suggest_recipes(&self, request: SuggestionRequest) -> AiResult<Suggestions> {
        let body = GenerateContentRequest::user_text(suggestion_prompt(&request)).with_config(
            GenerationConfig {
                response_mime_type: Some("application/json".to_owned()),
                response_schema: Some(json!({
                    "type": "OBJECT",
                    "properties": {
                        "recipes": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["recipes"]
                })),
                ..Default::default()
            },
        );

        let response = self.generate(&self.config.text_model, &body).await?;
        let suggestions = parse_suggestions(&response)?;

        tracing::info!(count = suggestions.recipes.len(), "Recipe suggestions received");

        Ok(suggestions)
    }

    #[tracing::instrument(skip(self, request), fields(model = %self.config.image_model))]
    async fn generate_image(&self, request: ImageRequest) -> AiResult<GeneratedImage> {
        let body = GenerateContentRequest::user_text(image_prompt(&request.prompt)).with_config(
            GenerationConfig {
                response_modalities: vec!["TEXT".to_owned(), "IMAGE".to_owned()],
                ..Default::default()
            },
        );

        let response = self.generate(&self.config.image_model, &body).await?;

        Ok(GeneratedImage {
            image_url: image_data_uri(&response)?,
        })
    }
}

fn parse_suggestions(response: &GenerateContentResponse) -> AiResult<Suggestions> {
    let text = response.first_text().ok_or(AiError::EmptyResponse)?;
    Ok(serde_json::from_str(text)?)
}

/// First inline image of the response as a `data:` URI.
fn image_data_uri(response: &GenerateContentResponse) -> AiResult<String> {
    let image = response.first_inline_data().ok_or(AiError::EmptyResponse)?;

    if !image.mime_type.starts_with("image/") {
        return Err(AiError::Decode(format!(
            "unexpected mime type '{}'",
            image.mime_type
        )));
    }

    STANDARD
        .decode(&image.data)
        .map_err(|e| AiError::Decode(e.to_string()))?;

    Ok(format!("data:{};base64,{}", image.mime_type, image.data))
}

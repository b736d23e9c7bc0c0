use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    pub fn user_text(text: String) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_owned()),
                parts: vec![Part {
                    text: Some(text),
                    inline_data: None,
                }],
            }],
            generation_config: None,
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub response_modalities: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Content,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .iter()
            .flat_map(|candidate| candidate.content.parts.iter())
    }

    pub fn first_text(&self) -> Option<&str> {
        self.parts().find_map(|part| {
            part.text
                .as_deref()
                .filter(|text| !text.trim().is_empty())
        })
    }

    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.parts().find_map(|part| part.inline_data.as_ref())
    }
}

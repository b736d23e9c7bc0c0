#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("AI assistant is not configured")]
    NotConfigured,

    #[cfg(feature = "full")]
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("could not decode model response: {0}")]
    Decode(String),

    #[error("model returned no usable content")]
    EmptyResponse,
}

impl From<serde_json::Error> for AiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

pub type AiResult<T> = std::result::Result<T, AiError>;

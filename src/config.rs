use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, path::PathBuf, sync::Arc, time::Duration};

use mealboard_ai::{DisabledAssistant, GenerativeClient, GenerativeConfig, RecipeAssistant};

use crate::session::SessionStore;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON recipe file; the embedded seed catalog is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_ai_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_ai_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_text_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.0-flash-preview-image-generation".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl AiConfig {
    /// Hosted model client, or [`DisabledAssistant`] when no API key is set
    pub fn build_assistant(&self) -> anyhow::Result<Arc<dyn RecipeAssistant>> {
        if self.api_key.is_empty() {
            tracing::warn!("No AI API key configured, suggestions and image generation disabled");
            return Ok(Arc::new(DisabledAssistant));
        }

        let client = GenerativeClient::new(GenerativeConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            text_model: self.text_model.clone(),
            image_model: self.image_model.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        })?;

        Ok(Arc::new(client))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
    #[serde(default = "default_idle_minutes")]
    pub idle_minutes: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_minutes: default_idle_minutes(),
        }
    }
}

fn default_max_sessions() -> usize {
    crate::session::DEFAULT_MAX_SESSIONS
}

fn default_idle_minutes() -> u64 {
    crate::session::DEFAULT_IDLE_TIMEOUT.as_secs() / 60
}

impl SessionConfig {
    pub fn build_store(&self) -> SessionStore {
        SessionStore::with_limits(
            self.max_sessions,
            Duration::from_secs(self.idle_minutes.saturating_mul(60)),
        )
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy `GEMINI_API_KEY`
    /// 2. Environment variables (MEALBOARD__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALBOARD")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("GEMINI_API_KEY") {
            builder = builder.set_override("ai.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.ai.timeout_secs == 0 {
            return Err("AI timeout_secs must be at least 1".to_string());
        }
        if self.session.max_sessions == 0 {
            return Err("Session max_sessions must be at least 1".to_string());
        }
        if self.session.idle_minutes == 0 {
            return Err("Session idle_minutes must be at least 1".to_string());
        }
        Ok(())
    }
}

//! Runtime configuration.
//!
//! The only environment-driven setting is the Gemini API key. Everything else
//! is a constant that the command line may override per invocation.

use std::env;
use thiserror::Error;

use crate::api_connection::endpoints::{GEMINI_BASE_URL, GEMINI_MODEL};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Where the cookbook backend listens.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

pub const DEFAULT_SERVE_ADDR: &str = "127.0.0.1:8080";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key not found in environment: {0}")]
    MissingApiKey(String),
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: GEMINI_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Reads the key named by `api_key_env_var`, after loading `.env` if present.
    pub fn from_env(api_key_env_var: &str) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let api_key = env::var(api_key_env_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(api_key_env_var.to_string()))?;
        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

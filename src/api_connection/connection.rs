use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt;
use thiserror::Error;

use super::endpoints::{
    generate_content_url, ApiErrorResponse, GenerateContentRequest, GenerateContentResponse,
};
use crate::config::{ConfigError, GeminiConfig};

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key not found in environment: {0}")]
    MissingApiKey(String),

    /// No HTTP response came back at all.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
}

impl From<ConfigError> for LlmError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingApiKey(name) => LlmError::MissingApiKey(name),
        }
    }
}

/// A text-in, text-out language model.
#[async_trait]
pub trait TextGenerator: Send + Sync + fmt::Debug {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    fn model_name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn from_env(api_key_env_var: &str) -> Result<Self, LlmError> {
        Ok(Self::new(GeminiConfig::from_env(api_key_env_var)?))
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let url = generate_content_url(&self.config.base_url, &self.config.model);
        let request = GenerateContentRequest::from_prompt(prompt);

        tracing::debug!(model = %self.config.model, "sending generateContent request");
        let response = self
            .client
            .post(url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error.message);
            tracing::warn!(%status, "Gemini returned an error status");
            return Err(LlmError::Api { status, message });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
        let text = parsed
            .first_text()
            .ok_or_else(|| LlmError::MalformedResponse("no text in first candidate".to_string()))?;

        tracing::debug!(chars = text.len(), "received model reply");
        Ok(text.to_string())
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

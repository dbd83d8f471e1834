use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::DEFAULT_BACKEND_URL;
use crate::recipe::{RecipeDraft, StoredRecipe};

pub const LIST_PATH: &str = "/api/recipes/all";
pub const SAVE_PATH: &str = "/api/recipes/save";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cookbook request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("cookbook backend returned {0}")]
    Status(StatusCode),
}

/// Client for the cookbook backend.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    base_url: String,
    client: Client,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl RecipeStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// All saved recipes, in the order the backend returns them.
    pub async fn list_all(&self) -> Result<Vec<StoredRecipe>, StoreError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, LIST_PATH))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }
        let recipes: Vec<StoredRecipe> = response.json().await?;
        tracing::debug!(count = recipes.len(), "listed cookbook recipes");
        Ok(recipes)
    }

    /// Persists `draft` with its ingredients joined into one string.
    pub async fn save(&self, draft: &RecipeDraft) -> Result<StoredRecipe, StoreError> {
        let body = draft.to_new_recipe();
        let response = self
            .client
            .post(format!("{}{}", self.base_url, SAVE_PATH))
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }
        let stored: StoredRecipe = response.json().await?;
        tracing::info!(id = stored.id, title = %stored.title, "saved recipe to cookbook");
        Ok(stored)
    }
}

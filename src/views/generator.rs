use std::time::Instant;

use super::status::{StatusKind, StatusMessage, StatusSlot};
use crate::api_connection::TextGenerator;
use crate::recipe::{Cuisine, MealType, RecipeDraft, StoredRecipe};
use crate::recipe_generator::RecipeGenerator;
use crate::recipe_store::RecipeStore;

pub const READY_MESSAGE: &str = "Dish is ready!";
pub const SAVED_MESSAGE: &str = "Recipe saved to your cookbook!";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save to database.";

/// State behind the generator screen.
#[derive(Debug, Default)]
pub struct GeneratorView {
    pub ingredients: String,
    pub meal_type: MealType,
    pub cuisine: Cuisine,
    recipe: Option<RecipeDraft>,
    loading: bool,
    saved: bool,
    status: StatusSlot,
}

impl GeneratorView {
    pub fn new(ingredients: impl Into<String>, meal_type: MealType, cuisine: Cuisine) -> Self {
        Self {
            ingredients: ingredients.into(),
            meal_type,
            cuisine,
            ..Self::default()
        }
    }

    pub fn recipe(&self) -> Option<&RecipeDraft> {
        self.recipe.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn status_at(&self, now: Instant) -> Option<&StatusMessage> {
        self.status.visible_at(now)
    }

    pub fn expire_status(&mut self, now: Instant) {
        self.status.expire(now);
    }

    pub fn can_generate(&self) -> bool {
        !self.loading && !self.ingredients.trim().is_empty()
    }

    pub fn can_save(&self) -> bool {
        !self.loading && !self.saved && self.recipe.as_ref().is_some_and(RecipeDraft::has_title)
    }

    /// Runs one structured generation. Returns whether a draft was produced.
    pub async fn generate<G: TextGenerator>(&mut self, generator: &RecipeGenerator<G>) -> bool {
        if !self.can_generate() {
            return false;
        }
        self.recipe = None;
        self.saved = false;
        self.status.clear();
        self.loading = true;

        let result = generator
            .generate_recipe(&self.ingredients, self.meal_type, self.cuisine)
            .await;
        self.loading = false;

        match result {
            Ok(draft) => {
                self.recipe = Some(draft);
                self.status.post(StatusKind::Success, READY_MESSAGE, Instant::now());
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "recipe generation failed");
                self.status.post(StatusKind::Error, e.user_message(), Instant::now());
                false
            }
        }
    }

    /// Saves the current draft once. Later calls are ignored.
    pub async fn save(&mut self, store: &RecipeStore) -> Option<StoredRecipe> {
        if !self.can_save() {
            return None;
        }
        let draft = self.recipe.clone()?;
        self.loading = true;
        let result = store.save(&draft).await;
        self.loading = false;

        match result {
            Ok(stored) => {
                self.saved = true;
                self.status.post(StatusKind::Success, SAVED_MESSAGE, Instant::now());
                Some(stored)
            }
            Err(e) => {
                tracing::warn!(error = %e, "saving recipe failed");
                self.status.post(StatusKind::Error, SAVE_FAILED_MESSAGE, Instant::now());
                None
            }
        }
    }
}

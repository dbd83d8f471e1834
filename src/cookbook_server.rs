//! In-memory cookbook backend.
//!
//! Serves the two endpoints [`crate::recipe_store::RecipeStore`] talks to.
//! Ids are assigned sequentially from 1 and recipes are listed in insertion
//! order. Nothing survives a restart.

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

use crate::recipe::{NewRecipe, StoredRecipe};
use crate::recipe_store::{LIST_PATH, SAVE_PATH};

#[derive(Debug, Default)]
pub struct Cookbook {
    recipes: Vec<StoredRecipe>,
    next_id: i64,
}

impl Cookbook {
    pub fn insert(&mut self, recipe: NewRecipe) -> StoredRecipe {
        self.next_id += 1;
        let stored = StoredRecipe::from_new(self.next_id, recipe);
        self.recipes.push(stored.clone());
        stored
    }

    pub fn all(&self) -> &[StoredRecipe] {
        &self.recipes
    }
}

pub type AppState = Arc<RwLock<Cookbook>>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(SAVE_PATH, post(save_recipe))
        .route(LIST_PATH, get(list_recipes))
        .with_state(state)
}

async fn save_recipe(
    State(state): State<AppState>,
    Json(recipe): Json<NewRecipe>,
) -> (StatusCode, Json<StoredRecipe>) {
    let stored = state.write().await.insert(recipe);
    tracing::info!(id = stored.id, title = %stored.title, "stored recipe");
    (StatusCode::OK, Json(stored))
}

async fn list_recipes(State(state): State<AppState>) -> Json<Vec<StoredRecipe>> {
    Json(state.read().await.all().to_vec())
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Cookbook backend listening on {}", listener.local_addr()?);
    axum::serve(listener, router(AppState::default())).await
}

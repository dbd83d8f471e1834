use crate::recipe::StoredRecipe;
use crate::recipe_store::RecipeStore;

/// State behind the saved-recipe gallery.
#[derive(Debug, Default)]
pub struct CookbookView {
    recipes: Vec<StoredRecipe>,
    selected: Option<i64>,
}

impl CookbookView {
    /// Fetches the gallery. A failed fetch leaves it empty.
    pub async fn load(store: &RecipeStore) -> Self {
        let recipes = match store.list_all().await {
            Ok(recipes) => recipes,
            Err(e) => {
                tracing::warn!(error = %e, "error fetching recipes");
                Vec::new()
            }
        };
        Self::from_recipes(recipes)
    }

    pub fn from_recipes(recipes: Vec<StoredRecipe>) -> Self {
        Self {
            recipes,
            selected: None,
        }
    }

    pub fn recipes(&self) -> &[StoredRecipe] {
        &self.recipes
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Opens the detail for `id`. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: i64) -> Option<&StoredRecipe> {
        if self.recipes.iter().any(|r| r.id == id) {
            self.selected = Some(id);
        }
        self.selected()
    }

    pub fn selected(&self) -> Option<&StoredRecipe> {
        let id = self.selected?;
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: i64, title: &str) -> StoredRecipe {
        StoredRecipe {
            id,
            title: title.to_string(),
            ingredients: "Rice, Egg".to_string(),
            instructions: "Cook.".to_string(),
            meal_type: None,
            cooking_time: None,
            servings: 1,
        }
    }

    #[test]
    fn select_and_close() {
        let mut view = CookbookView::from_recipes(vec![stored(3, "Soup"), stored(7, "Curry")]);
        assert!(view.selected().is_none());
        assert_eq!(view.select(7).map(|r| r.title.as_str()), Some("Curry"));
        assert_eq!(view.select(99).map(|r| r.id), Some(7));
        view.close();
        assert!(view.selected().is_none());
    }
}

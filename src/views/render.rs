use std::fmt::Write;

use super::status::{StatusKind, StatusMessage};
use crate::recipe::{Cuisine, RecipeDraft, StoredRecipe};
use crate::recipe_parser::ParsedRecipe;

const NOT_AVAILABLE: &str = "N/A";

pub fn render_status(message: &StatusMessage) -> String {
    match message.kind {
        StatusKind::Success => format!("[ok] {}", message.text),
        StatusKind::Error => format!("[error] {}", message.text),
    }
}

pub fn render_draft(draft: &RecipeDraft, cuisine: Cuisine) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", cuisine, draft.title);
    let _ = writeln!(
        out,
        "Time: {}  |  Serves: {}",
        draft.cooking_time.as_deref().unwrap_or(NOT_AVAILABLE),
        draft.display_servings()
    );
    let _ = writeln!(out, "\nGrocery List");
    for ingredient in &draft.ingredients {
        let _ = writeln!(out, "  [ ] {}", ingredient.display_text());
    }
    let _ = writeln!(out, "\nChef's Instructions");
    let _ = writeln!(out, "{}", draft.instructions);
    out
}

pub fn render_suggestions(recipes: &[ParsedRecipe]) -> String {
    let mut out = String::new();
    for recipe in recipes {
        let _ = writeln!(out, "=== {}. {} ===", recipe.id, recipe.name);
        let _ = writeln!(out, "{}", recipe.content.trim_end());
        let _ = writeln!(out);
    }
    out
}

pub fn render_gallery(recipes: &[StoredRecipe]) -> String {
    if recipes.is_empty() {
        return "Your cookbook is empty! Go generate some recipes.\n".to_string();
    }
    let mut out = String::new();
    for recipe in recipes {
        let _ = writeln!(
            out,
            "#{:<4} {:<10} {}  ({}, serves {})",
            recipe.id,
            recipe.meal_type.as_deref().unwrap_or("Dish"),
            recipe.title,
            recipe.cooking_time.as_deref().unwrap_or(NOT_AVAILABLE),
            recipe.servings
        );
    }
    out
}

pub fn render_detail(recipe: &StoredRecipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.title);
    let _ = writeln!(
        out,
        "Time: {}  |  Serves {}",
        recipe.cooking_time.as_deref().unwrap_or(NOT_AVAILABLE),
        recipe.servings
    );
    let _ = writeln!(out, "\nIngredients");
    for ingredient in recipe.ingredient_list() {
        let _ = writeln!(out, "  - {}", ingredient);
    }
    let _ = writeln!(out, "\nInstructions");
    let _ = writeln!(out, "{}", recipe.instructions);
    out
}

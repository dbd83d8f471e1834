use anyhow::{Context, Result};
use savour_kitchen::api_connection::GeminiProvider;
use savour_kitchen::cli::{parse_args, Command};
use savour_kitchen::config::API_KEY_ENV_VAR;
use savour_kitchen::recipe::{Cuisine, MealType};
use savour_kitchen::recipe_generator::{suggest_recipes_from_env, RecipeGenerator};
use savour_kitchen::recipe_store::RecipeStore;
use savour_kitchen::views::render::{
    render_detail, render_draft, render_gallery, render_status, render_suggestions,
};
use savour_kitchen::views::{CookbookView, GeneratorView};
use savour_kitchen::{cookbook_server, logging};
use std::time::Instant;

async fn run_generate(
    ingredients: String,
    meal_type: MealType,
    cuisine: Cuisine,
    save: bool,
    backend: &str,
) -> Result<()> {
    let provider = GeminiProvider::from_env(API_KEY_ENV_VAR)
        .with_context(|| format!("Set {} to generate recipes", API_KEY_ENV_VAR))?;
    let generator = RecipeGenerator::new(provider);
    let mut view = GeneratorView::new(ingredients, meal_type, cuisine);

    if !view.can_generate() {
        anyhow::bail!("Tell the chef what is in the pantry first (--ingredients)");
    }

    println!("Consulting top chefs...");
    let generated = view.generate(&generator).await;
    if let Some(status) = view.status_at(Instant::now()) {
        println!("{}", render_status(status));
    }
    if !generated {
        anyhow::bail!("Recipe generation failed");
    }
    if let Some(draft) = view.recipe() {
        println!("\n{}", render_draft(draft, view.cuisine));
    }

    if save {
        let store = RecipeStore::new(backend);
        view.save(&store).await;
        if let Some(status) = view.status_at(Instant::now()) {
            println!("{}", render_status(status));
        }
    }
    Ok(())
}

async fn run_cookbook(show: Option<i64>, backend: &str) -> Result<()> {
    let store = RecipeStore::new(backend);
    let mut view = CookbookView::load(&store).await;

    match show {
        Some(id) => {
            let recipe = view
                .select(id)
                .with_context(|| format!("No saved recipe with id {}", id))?;
            println!("{}", render_detail(recipe));
        }
        None => println!("{}", render_gallery(view.recipes())),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    match parse_args().command {
        Command::Generate {
            ingredients,
            meal_type,
            cuisine,
            save,
            backend,
        } => run_generate(ingredients, meal_type, cuisine, save, &backend).await?,
        Command::Suggest {
            ingredients,
            persons,
        } => {
            let recipes = suggest_recipes_from_env(API_KEY_ENV_VAR, &ingredients, persons).await;
            println!("{}", render_suggestions(&recipes));
        }
        Command::Cookbook { show, backend } => run_cookbook(show, &backend).await?,
        Command::Serve { addr } => cookbook_server::serve(&addr)
            .await
            .with_context(|| format!("Cookbook backend failed on {}", addr))?,
    }

    Ok(())
}

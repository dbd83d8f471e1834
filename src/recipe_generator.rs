use thiserror::Error;

use crate::api_connection::{GeminiProvider, LlmError, TextGenerator};
use crate::mock_recipes::mock_recipes;
use crate::recipe::{Cuisine, MealType, RecipeDraft};
use crate::recipe_parser::{parse_recipes, ParsedRecipe};

pub const RATE_LIMIT_MESSAGE: &str =
    "The Chef is overwhelmed! (Rate limit reached). Please wait 1 minute and try again.";
pub const QUOTA_MESSAGE: &str =
    "Daily Quota Exceeded. The free API credits for today are finished.";
pub const SERVICE_DOWN_MESSAGE: &str =
    "Google's AI service is temporarily down. Please try again shortly.";
pub const NETWORK_MESSAGE: &str = "Network Error. Please check your internet connection.";
pub const DECODE_MESSAGE: &str =
    "The Chef's notes were unreadable (the AI did not return valid JSON). Please try again.";
pub const MISSING_KEY_MESSAGE: &str = "No Gemini API key is configured.";
const GENERIC_ERROR_DETAIL: &str = "Something went wrong.";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Failed to decode recipe JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GenerateError {
    /// Text shown to the user for a failed structured generation.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::Decode(_) => DECODE_MESSAGE.to_string(),
            GenerateError::Llm(LlmError::Network(_)) => NETWORK_MESSAGE.to_string(),
            GenerateError::Llm(LlmError::MissingApiKey(_)) => MISSING_KEY_MESSAGE.to_string(),
            GenerateError::Llm(LlmError::Api { status, message }) => match status.as_u16() {
                429 => RATE_LIMIT_MESSAGE.to_string(),
                402 | 403 => QUOTA_MESSAGE.to_string(),
                503 => SERVICE_DOWN_MESSAGE.to_string(),
                _ => format!(
                    "Error: {}",
                    message.as_deref().unwrap_or(GENERIC_ERROR_DETAIL)
                ),
            },
            GenerateError::Llm(LlmError::MalformedResponse(_)) => {
                format!("Error: {}", GENERIC_ERROR_DETAIL)
            }
        }
    }
}

pub fn structured_recipe_prompt(ingredients: &str, meal_type: MealType, cuisine: Cuisine) -> String {
    format!(
        "Create a recipe using: {ingredients}.
Meal: {meal_type}, Cuisine: {cuisine}.
Return ONLY valid JSON.
Format:
{{
    \"title\": \"Recipe Name\",
    \"ingredients\": [\"Item 1\", \"Item 2\"],
    \"instructions\": \"Step 1... Step 2...\",
    \"cookingTime\": \"15 mins\",
    \"servings\": 2
}}
Make sure 'ingredients' is a simple ARRAY OF STRINGS."
    )
}

pub fn suggestions_prompt(ingredients: &str, persons: u32) -> String {
    format!(
        "Generate 3 creative recipe suggestions using the following ingredients: {ingredients}.
The recipes should be for {persons} person(s).
For each recipe, provide:
1. Recipe name
2. Ingredients list with quantities scaled for {persons} person(s)
3. Step-by-step cooking instructions
4. Estimated cooking time
5. Difficulty level (Easy, Medium, Hard)

Format each recipe clearly with headers and bullet points. Make sure the recipes are practical and use the given ingredients as the main components."
    )
}

/// Removes Markdown code fences (```` ```json ```` and ```` ``` ````) around a reply.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Turns a structured reply into a draft. Fails on anything that is not JSON.
pub fn decode_recipe_draft(raw: &str, meal_type: MealType) -> Result<RecipeDraft, serde_json::Error> {
    let cleaned = strip_code_fences(raw);
    let mut draft: RecipeDraft = serde_json::from_str(&cleaned)?;
    draft.meal_type = meal_type.to_string();
    Ok(draft)
}

#[derive(Debug)]
pub struct RecipeGenerator<G> {
    generator: G,
}

impl<G: TextGenerator> RecipeGenerator<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Asks for one JSON recipe. Every failure is returned to the caller.
    pub async fn generate_recipe(
        &self,
        ingredients: &str,
        meal_type: MealType,
        cuisine: Cuisine,
    ) -> Result<RecipeDraft, GenerateError> {
        let prompt = structured_recipe_prompt(ingredients, meal_type, cuisine);
        let raw = self.generator.complete(&prompt).await?;
        tracing::debug!(raw = %raw, "structured recipe reply");

        let draft = decode_recipe_draft(&raw, meal_type).map_err(|e| {
            tracing::warn!(error = %e, "model reply was not valid recipe JSON");
            GenerateError::Decode(e)
        })?;
        tracing::info!(title = %draft.title, model = self.generator.model_name(), "generated recipe");
        Ok(draft)
    }

    /// Asks for three prose recipes and splits the reply. Never fails: any
    /// error is replaced by the placeholder set from [`mock_recipes`].
    pub async fn suggest_recipes(&self, ingredients: &str, persons: u32) -> Vec<ParsedRecipe> {
        let prompt = suggestions_prompt(ingredients, persons);
        match self.generator.complete(&prompt).await {
            Ok(raw) => {
                tracing::debug!(raw = %raw, "free-text recipe reply");
                parse_recipes(&raw, persons)
            }
            Err(e) => {
                tracing::warn!(error = %e, "recipe suggestion failed, falling back to mock data");
                mock_recipes(persons)
            }
        }
    }
}

/// [`RecipeGenerator::suggest_recipes`] against Gemini, tolerating a missing key.
pub async fn suggest_recipes_from_env(
    api_key_env_var: &str,
    ingredients: &str,
    persons: u32,
) -> Vec<ParsedRecipe> {
    match GeminiProvider::from_env(api_key_env_var) {
        Ok(provider) => RecipeGenerator::new(provider)
            .suggest_recipes(ingredients, persons)
            .await,
        Err(e) => {
            tracing::warn!(error = %e, "Gemini not configured, falling back to mock data");
            mock_recipes(persons)
        }
    }
}

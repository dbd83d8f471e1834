mod common;

use common::{dead_url, error_reply, provider_at, FakeGemini};
use indoc::indoc;
use reqwest::StatusCode;
use savour_kitchen::recipe::{Cuisine, Ingredient, MealType};
use savour_kitchen::recipe_generator::{
    suggest_recipes_from_env, GenerateError, RecipeGenerator, NETWORK_MESSAGE, QUOTA_MESSAGE,
    RATE_LIMIT_MESSAGE, SERVICE_DOWN_MESSAGE,
};
use savour_kitchen::recipe_parser::UNSTRUCTURED_RECIPE_NAME;

fn bullet_quantities(content: &str) -> Vec<u32> {
    content
        .lines()
        .filter_map(|l| l.strip_prefix("• "))
        .filter_map(|l| l.split_whitespace().next()?.parse().ok())
        .collect()
}

#[tokio::test]
async fn structured_reply_becomes_a_draft() {
    let fake = FakeGemini::with_text(indoc! {r#"
        ```json
        {
            "title": "Garlic Fried Rice",
            "ingredients": ["2 cups rice", "3 cloves garlic"],
            "instructions": "Fry garlic. Add rice.",
            "cookingTime": "20 mins",
            "servings": 2
        }
        ```
    "#});
    let generator = RecipeGenerator::new(fake.start().await);

    let draft = generator
        .generate_recipe("rice, garlic", MealType::Dinner, Cuisine::Asian)
        .await
        .unwrap();

    assert_eq!(draft.title, "Garlic Fried Rice");
    assert_eq!(
        draft.ingredients,
        vec![
            Ingredient::PlainText("2 cups rice".to_string()),
            Ingredient::PlainText("3 cloves garlic".to_string()),
        ]
    );
    assert_eq!(draft.cooking_time.as_deref(), Some("20 mins"));
    assert_eq!(draft.servings, Some(2));
    assert_eq!(draft.meal_type, "Dinner");

    let prompt = &fake.prompts()[0];
    assert!(prompt.contains("rice, garlic"));
    assert!(prompt.contains("Meal: Dinner, Cuisine: Asian"));
}

#[tokio::test]
async fn structured_decode_failure_is_not_hidden_by_fallback() {
    let fake = FakeGemini::with_text("not json");
    let generator = RecipeGenerator::new(fake.start().await);

    let result = generator
        .generate_recipe("rice", MealType::Lunch, Cuisine::Italian)
        .await;

    assert!(matches!(result, Err(GenerateError::Decode(_))), "{:?}", result);
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
async fn structured_errors_map_to_user_messages() {
    let cases = [
        (StatusCode::TOO_MANY_REQUESTS, String::new(), RATE_LIMIT_MESSAGE.to_string()),
        (StatusCode::FORBIDDEN, String::new(), QUOTA_MESSAGE.to_string()),
        (StatusCode::PAYMENT_REQUIRED, String::new(), QUOTA_MESSAGE.to_string()),
        (StatusCode::SERVICE_UNAVAILABLE, String::new(), SERVICE_DOWN_MESSAGE.to_string()),
        (
            StatusCode::BAD_REQUEST,
            error_reply("Invalid prompt"),
            "Error: Invalid prompt".to_string(),
        ),
    ];

    for (status, body, expected) in cases {
        let fake = FakeGemini::replying(status, body);
        let generator = RecipeGenerator::new(fake.start().await);
        let err = generator
            .generate_recipe("rice", MealType::Lunch, Cuisine::Italian)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), expected, "status {}", status);
    }
}

#[tokio::test]
async fn structured_network_failure_has_connectivity_message() {
    let generator = RecipeGenerator::new(provider_at(dead_url().await));
    let err = generator
        .generate_recipe("rice", MealType::Lunch, Cuisine::Italian)
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), NETWORK_MESSAGE);
}

#[tokio::test]
async fn suggestions_are_parsed_from_free_text() {
    let fake = FakeGemini::with_text(indoc! {"
        ### **Recipe 1: Tomato Soup**
        • 4 tomatoes
        Simmer for 20 minutes.

        ### **Recipe 2: Bruschetta**
        • 2 tomatoes
        Toast the bread.
    "});
    let generator = RecipeGenerator::new(fake.start().await);

    let recipes = generator.suggest_recipes("tomato", 2).await;

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].name, "Tomato Soup");
    assert_eq!(recipes[0].content, "• 4 tomatoes\nSimmer for 20 minutes.\n");
    assert_eq!(recipes[1].id, 2);
    assert!(fake.prompts()[0].contains("for 2 person(s)"));
}

#[tokio::test]
async fn suggestions_without_headers_keep_the_whole_reply() {
    let reply = "Toss everything in a pan and enjoy.";
    let fake = FakeGemini::with_text(reply);
    let generator = RecipeGenerator::new(fake.start().await);

    let recipes = generator.suggest_recipes("anything", 1).await;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, UNSTRUCTURED_RECIPE_NAME);
    assert_eq!(recipes[0].content, reply);
}

#[tokio::test]
async fn suggestions_fall_back_to_scaled_mock_data_on_network_failure() {
    let generator = RecipeGenerator::new(provider_at(dead_url().await));

    let one = generator.suggest_recipes("rice", 1).await;
    let two = generator.suggest_recipes("rice", 2).await;

    assert_eq!(one.len(), 3);
    assert_eq!(two.len(), 3);
    for (a, b) in one.iter().zip(&two) {
        assert_eq!(a.name, b.name);
        let doubled: Vec<u32> = bullet_quantities(&a.content).iter().map(|q| q * 2).collect();
        assert_eq!(bullet_quantities(&b.content), doubled);
    }
}

#[tokio::test]
async fn suggestions_fall_back_on_api_errors() {
    let fake = FakeGemini::replying(StatusCode::INTERNAL_SERVER_ERROR, error_reply("boom"));
    let generator = RecipeGenerator::new(fake.start().await);

    let recipes = generator.suggest_recipes("rice", 3).await;
    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[0].name, "Chicken Fried Rice");
    assert!(recipes[0].content.contains("• 6 cups cooked rice"));
}

#[tokio::test]
async fn suggestions_without_api_key_use_mock_data() {
    let recipes =
        suggest_recipes_from_env("SAVOUR_SUGGEST_KEY_THAT_IS_NEVER_SET", "rice", 1).await;
    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[2].name, "Simple Tomato Pasta");
}

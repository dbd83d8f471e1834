use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Servings shown on a recipe card when the model left the field out.
pub const DEFAULT_DISPLAY_SERVINGS: u32 = 2;
/// Servings persisted when the draft carries none.
pub const DEFAULT_SAVED_SERVINGS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Snack,
    Dinner,
    Dessert,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Snack => "Snack",
            MealType::Dinner => "Dinner",
            MealType::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum Cuisine {
    Indian,
    #[default]
    Italian,
    American,
    Mexican,
    Asian,
    Mediterranean,
}

impl Cuisine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Indian => "Indian",
            Cuisine::Italian => "Italian",
            Cuisine::American => "American",
            Cuisine::Mexican => "Mexican",
            Cuisine::Asian => "Asian",
            Cuisine::Mediterranean => "Mediterranean",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a generated ingredient list.
///
/// The model is asked for plain strings but sometimes answers with
/// `{"item": .., "amount": ..}` objects instead.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Ingredient {
    PlainText(String),
    Measured {
        #[serde(default, deserialize_with = "deserialize_null_as_default")]
        item: String,
        #[serde(default, deserialize_with = "deserialize_amount")]
        amount: String,
    },
}

impl Ingredient {
    /// Canonical display and transport form.
    pub fn display_text(&self) -> String {
        match self {
            Ingredient::PlainText(text) => text.trim().to_string(),
            Ingredient::Measured { item, amount } => {
                format!("{} {}", amount.trim(), item.trim()).trim().to_string()
            }
        }
    }
}

/// Joins ingredients into the single comma-separated string the backend stores.
pub fn join_ingredients(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(Ingredient::display_text)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientsField {
    Many(Vec<Ingredient>),
    One(String),
}

fn deserialize_ingredients<'de, D>(deserializer: D) -> Result<Vec<Ingredient>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IngredientsField::deserialize(deserializer)? {
        IngredientsField::Many(items) => items,
        IngredientsField::One(text) if text.trim().is_empty() => Vec::new(),
        IngredientsField::One(text) => vec![Ingredient::PlainText(text)],
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Integer(n) => n.to_string(),
            TextOrNumber::Decimal(n) => n.to_string(),
        }
    }
}

// `"amount": 2` and `"cookingTime": 15` are as common as their quoted forms.
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(TextOrNumber::into_text))
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_text(deserializer)?.unwrap_or_default())
}

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ServingsField {
    Count(u32),
    Text(String),
}

// Models occasionally quote the number ("4") or answer with a range ("2-3").
fn deserialize_servings<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ServingsField>::deserialize(deserializer)? {
        Some(ServingsField::Count(n)) => Some(n),
        Some(ServingsField::Text(text)) => text
            .split(|c: char| !c.is_ascii_digit())
            .find(|part| !part.is_empty())
            .and_then(|digits| digits.parse().ok()),
        None => None,
    })
}

/// A generated, not yet persisted recipe.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_ingredients")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub cooking_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_servings")]
    pub servings: Option<u32>,
    /// Filled in by the caller, the model never sets it.
    #[serde(default)]
    pub meal_type: String,
}

impl RecipeDraft {
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn display_servings(&self) -> u32 {
        self.servings.unwrap_or(DEFAULT_DISPLAY_SERVINGS)
    }

    pub fn to_new_recipe(&self) -> NewRecipe {
        NewRecipe {
            title: self.title.clone(),
            ingredients: join_ingredients(&self.ingredients),
            instructions: self.instructions.clone(),
            meal_type: self.meal_type.clone(),
            cooking_time: self.cooking_time.clone(),
            servings: self.servings.unwrap_or(DEFAULT_SAVED_SERVINGS),
        }
    }
}

/// Body of the backend's create call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub meal_type: String,
    pub cooking_time: Option<String>,
    pub servings: u32,
}

/// A recipe as the cookbook backend returns it. Any column may come back null.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecipe {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub ingredients: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub instructions: String,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub cooking_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub servings: u32,
}

impl StoredRecipe {
    pub fn from_new(id: i64, recipe: NewRecipe) -> Self {
        Self {
            id,
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            meal_type: Some(recipe.meal_type),
            cooking_time: recipe.cooking_time,
            servings: recipe.servings,
        }
    }

    /// Splits the stored comma-joined ingredient string back into entries.
    pub fn ingredient_list(&self) -> Vec<String> {
        self.ingredients
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

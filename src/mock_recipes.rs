//! Placeholder recipes served when the free-text generation path fails.
//!
//! Every bullet quantity is a fixed base amount multiplied by the person
//! count. The scaling is deliberately naive.

use crate::recipe_parser::ParsedRecipe;

struct MockIngredient {
    base: u32,
    text: &'static str,
}

struct MockRecipe {
    name: &'static str,
    ingredients: &'static [MockIngredient],
    /// Unscaled bullets appended after the measured ones.
    extras: &'static [&'static str],
    steps: &'static [&'static str],
    cooking_time: &'static str,
}

const fn ing(base: u32, text: &'static str) -> MockIngredient {
    MockIngredient { base, text }
}

const MOCK_RECIPES: [MockRecipe; 3] = [
    MockRecipe {
        name: "Chicken Fried Rice",
        ingredients: &[
            ing(2, "cups cooked rice"),
            ing(1, "cup cooked chicken, diced"),
            ing(2, "eggs, beaten"),
            ing(1, "cup mixed vegetables (carrots, peas, corn)"),
            ing(2, "tbsp soy sauce"),
            ing(1, "tbsp vegetable oil"),
        ],
        extras: &["Salt and pepper to taste"],
        steps: &[
            "Heat oil in a large wok or skillet over medium-high heat",
            "Add vegetables and cook for 2-3 minutes",
            "Push vegetables to one side, add eggs and scramble until cooked",
            "Add chicken and cook for 2 minutes",
            "Add rice, soy sauce, salt, and pepper",
            "Stir-fry for 3-4 minutes until everything is well combined and heated through",
            "Serve hot",
        ],
        cooking_time: "15 minutes",
    },
    MockRecipe {
        name: "Vegetable Stir-Fry with Rice",
        ingredients: &[
            ing(2, "cups cooked rice"),
            ing(2, "cups mixed vegetables (broccoli, bell peppers, carrots, snap peas)"),
            ing(1, "tbsp vegetable oil"),
            ing(2, "tbsp soy sauce"),
            ing(1, "tsp ginger, minced"),
            ing(1, "clove garlic, minced"),
        ],
        extras: &["Salt and pepper to taste"],
        steps: &[
            "Heat oil in a large skillet over medium-high heat",
            "Add ginger and garlic, cook for 30 seconds",
            "Add vegetables and stir-fry for 4-5 minutes until crisp-tender",
            "Add soy sauce, salt, and pepper",
            "Serve over rice",
        ],
        cooking_time: "10 minutes",
    },
    MockRecipe {
        name: "Simple Tomato Pasta",
        ingredients: &[
            ing(4, "oz pasta"),
            ing(2, "tomatoes, diced"),
            ing(1, "onion, chopped"),
            ing(2, "cloves garlic, minced"),
            ing(2, "tbsp olive oil"),
        ],
        extras: &["Salt and pepper to taste", "Fresh basil (optional)"],
        steps: &[
            "Cook pasta according to package directions",
            "While pasta cooks, heat olive oil in a skillet",
            "Add onion and garlic, cook until softened (3-4 minutes)",
            "Add tomatoes, salt, and pepper, cook for 5-7 minutes",
            "Drain pasta and toss with tomato sauce",
            "Top with fresh basil if available",
        ],
        cooking_time: "15 minutes",
    },
];

impl MockRecipe {
    fn render(&self, persons: u32) -> String {
        let mut out = format!("Ingredients for {} persons:\n", persons);
        for ingredient in self.ingredients {
            let quantity = u64::from(ingredient.base) * u64::from(persons);
            out.push_str(&format!("• {} {}\n", quantity, ingredient.text));
        }
        for extra in self.extras {
            out.push_str(&format!("• {}\n", extra));
        }
        out.push_str("\nInstructions:\n");
        for (i, step) in self.steps.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }
        out.push_str(&format!(
            "\nCooking time: {}\nDifficulty: Easy",
            self.cooking_time
        ));
        out
    }
}

/// The three fallback recipes, quantities scaled by `persons`.
pub fn mock_recipes(persons: u32) -> Vec<ParsedRecipe> {
    MOCK_RECIPES
        .iter()
        .enumerate()
        .map(|(i, recipe)| ParsedRecipe {
            id: i as u32 + 1,
            name: recipe.name.to_string(),
            content: recipe.render(persons),
        })
        .collect()
}

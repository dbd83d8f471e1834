use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// At most this many sections are kept from one reply.
pub const MAX_PARSED_RECIPES: usize = 3;
/// Name given to text that shows up before the first header.
pub const PREAMBLE_RECIPE_NAME: &str = "Generated Recipe 1";
/// Name given to a reply without any recognizable header.
pub const UNSTRUCTURED_RECIPE_NAME: &str = "AI Generated Recipe";

/// A recipe section recovered from a free-text model reply.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ParsedRecipe {
    pub id: u32,
    pub name: String,
    pub content: String,
}

impl ParsedRecipe {
    fn open(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            content: String::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.content.push_str(line);
        self.content.push('\n');
    }
}

#[derive(Debug, Clone, Copy)]
enum NameRule {
    /// The name is the first capture group.
    Capture,
    /// The name is the line with any Recipe prefix or suffix removed.
    StripAffixes,
}

struct HeaderPattern {
    pattern: Regex,
    name: NameRule,
}

fn header(pattern: &str, name: NameRule) -> HeaderPattern {
    HeaderPattern {
        pattern: Regex::new(pattern).expect("header pattern is a valid regex"),
        name,
    }
}

// Tried in order, first match wins.
static HEADER_PATTERNS: Lazy<Vec<HeaderPattern>> = Lazy::new(|| {
    vec![
        // ### **Recipe 2: Tomato Soup**
        header(r"(?i)^### \*\*Recipe \d+: (.*)\*\*$", NameRule::Capture),
        // 1. Recipe 1: Tomato Soup
        header(r"(?i)^[1-3]\.\s*Recipe\s*\d*:?\s*(.*)$", NameRule::StripAffixes),
        // Recipe: Tomato Soup
        header(r"(?i)^Recipe\s*\d*:?\s*(.*)$", NameRule::StripAffixes),
        // Tomato Soup Recipe
        header(r"(?i)^(.*)\s*Recipe$", NameRule::StripAffixes),
    ]
});

static NUMBERED_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[1-3]\.\s*Recipe\s*\d*:?\s*").expect("valid regex"));
static RECIPE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Recipe\s*\d*:?\s*").expect("valid regex"));
static RECIPE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*Recipe$").expect("valid regex"));

fn strip_affixes(line: &str) -> String {
    let name = NUMBERED_PREFIX.replace(line, "");
    let name = RECIPE_PREFIX.replace(&name, "");
    let name = RECIPE_SUFFIX.replace(&name, "");
    name.trim().to_string()
}

/// Returns the recipe name when `line` opens a new section.
pub fn match_header(line: &str) -> Option<String> {
    HEADER_PATTERNS.iter().find_map(|header| {
        let captures = header.pattern.captures(line)?;
        Some(match header.name {
            NameRule::Capture => captures
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            NameRule::StripAffixes => strip_affixes(line),
        })
    })
}

/// Splits a free-text model reply into up to three recipe sections.
///
/// Never fails: a reply without any header comes back as a single
/// [`UNSTRUCTURED_RECIPE_NAME`] record holding the raw text. `person_count`
/// is already part of the prompt and does not influence parsing.
pub fn parse_recipes(raw_text: &str, person_count: u32) -> Vec<ParsedRecipe> {
    let lines = raw_text.split('\n').map(str::trim).filter(|l| !l.is_empty());

    let mut recipes: Vec<ParsedRecipe> = Vec::new();
    let mut current: Option<ParsedRecipe> = None;
    let mut saw_header = false;

    for line in lines {
        if let Some(name) = match_header(line) {
            saw_header = true;
            if let Some(done) = current.take() {
                recipes.push(done);
            }
            current = Some(ParsedRecipe::open(recipes.len() as u32 + 1, name));
            continue;
        }

        match current.as_mut() {
            Some(recipe) => recipe.push_line(line),
            None if recipes.is_empty() => {
                let mut preamble = ParsedRecipe::open(1, PREAMBLE_RECIPE_NAME);
                preamble.push_line(line);
                current = Some(preamble);
            }
            None => {}
        }
    }

    if let Some(done) = current.take() {
        recipes.push(done);
    }

    if recipes.is_empty() || !saw_header {
        tracing::debug!(person_count, "no recipe headers found, keeping reply as one recipe");
        return vec![ParsedRecipe {
            id: 1,
            name: UNSTRUCTURED_RECIPE_NAME.to_string(),
            content: raw_text.to_string(),
        }];
    }

    tracing::debug!(
        person_count,
        sections = recipes.len(),
        "parsed recipe sections from reply"
    );
    recipes.truncate(MAX_PARSED_RECIPES);
    recipes
}

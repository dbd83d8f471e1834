use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_BACKEND_URL, DEFAULT_SERVE_ADDR};
use crate::recipe::{Cuisine, MealType};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one recipe and optionally save it to the cookbook
    Generate {
        /// What is in the pantry, e.g. "chicken, rice, garlic"
        #[arg(short, long)]
        ingredients: String,
        #[arg(short, long, value_enum, default_value = "lunch")]
        meal_type: MealType,
        #[arg(short, long, value_enum, default_value = "italian")]
        cuisine: Cuisine,
        /// Save the generated recipe to the cookbook
        #[arg(long)]
        save: bool,
        #[arg(long, default_value = DEFAULT_BACKEND_URL)]
        backend: String,
    },
    /// Suggest three free-form recipes for a number of people
    Suggest {
        #[arg(short, long)]
        ingredients: String,
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        persons: u32,
    },
    /// Browse saved recipes
    Cookbook {
        /// Show the full recipe with this id
        #[arg(long)]
        show: Option<i64>,
        #[arg(long, default_value = DEFAULT_BACKEND_URL)]
        backend: String,
    },
    /// Run the in-memory cookbook backend
    Serve {
        #[arg(long, default_value = DEFAULT_SERVE_ADDR)]
        addr: String,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

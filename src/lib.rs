pub mod api_connection;
pub mod cli;
pub mod config;
pub mod cookbook_server;
pub mod logging;
pub mod mock_recipes;
pub mod recipe;
pub mod recipe_generator;
pub mod recipe_parser;
pub mod recipe_store;
pub mod views;

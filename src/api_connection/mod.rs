pub mod connection;
pub mod endpoints;

pub use connection::{GeminiProvider, LlmError, TextGenerator};

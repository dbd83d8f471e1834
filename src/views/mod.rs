pub mod cookbook;
pub mod generator;
pub mod render;
pub mod status;

pub use cookbook::CookbookView;
pub use generator::GeneratorView;
pub use status::{StatusKind, StatusMessage, STATUS_TTL};

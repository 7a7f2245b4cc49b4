pub mod core;
pub mod handlers;
pub mod quiz;

pub use self::core::{CategoryRepository, QuestionRepository};

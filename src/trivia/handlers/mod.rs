mod categories;
mod questions;
mod quizzes;

pub use categories::{category_questions, list_categories};
pub use questions::{create_question, delete_question, list_questions, search_questions};
pub use quizzes::next_question;

use crate::AppState;
use crate::error::{ApiError, Result};

/// Type name of the category a listing is reported under
async fn current_category(state: &AppState, category_id: i64) -> Result<String> {
    state
        .categories
        .find(category_id)
        .await?
        .map(|c| c.kind)
        .ok_or_else(|| ApiError::Internal(format!("question references missing category {category_id}")))
}

use crate::AppState;
use crate::error::{ApiError, Result};
use crate::extract::PathParam;
use crate::messages::{CategoriesResponse, QuestionListResponse};
use axum::Json;
use axum::extract::State;
use tracing::debug;

pub async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>> {
    let categories = state.categories.all().await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound("no categories".to_string()));
    }

    debug!(count = categories.len(), "Listing categories");

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(|c| (c.id, c.kind)).collect(),
    }))
}

pub async fn category_questions(
    State(state): State<AppState>,
    PathParam(category_id): PathParam<i64>,
) -> Result<Json<QuestionListResponse>> {
    let Some(category) = state.categories.find(category_id).await? else {
        return Err(ApiError::NotFound(format!("category {category_id}")));
    };

    let questions = state.questions.by_category(category_id).await?;
    let total_questions = state.questions.count().await?;

    debug!(category_id, count = questions.len(), "Listing category questions");

    Ok(Json(QuestionListResponse {
        questions,
        total_questions,
        current_category: category.kind,
    }))
}

use super::current_category;
use crate::AppState;
use crate::error::{ApiError, Result};
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::messages::{
    CreateQuestionRequest, CreatedResponse, DeletedResponse, QuestionListResponse,
    QuestionPageResponse, SearchRequest,
};
use crate::trivia::core::{NewQuestion, Page};
use axum::Json;
use axum::extract::State;
use tracing::{debug, info};

pub async fn list_questions(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<Vec<(String, String)>>,
) -> Result<Json<QuestionPageResponse>> {
    let page = Page::from_query(&query);

    let questions = state.questions.page(page.offset(), page.limit()).await?;
    let Some(first) = questions.first() else {
        return Err(ApiError::NotFound(format!("page {}", page.number())));
    };

    let current_category = current_category(&state, first.category).await?;
    let total_questions = state.questions.count().await?;
    let categories = state.categories.all().await?;

    debug!(page = page.number(), count = questions.len(), "Listing questions");

    Ok(Json(QuestionPageResponse {
        questions,
        total_questions,
        categories,
        current_category,
    }))
}

pub async fn delete_question(
    State(state): State<AppState>,
    PathParam(question_id): PathParam<i64>,
) -> Result<Json<DeletedResponse>> {
    if !state.questions.delete(question_id).await? {
        return Err(ApiError::NotFound(format!("question {question_id}")));
    }

    info!(question_id, "Deleted question");

    Ok(Json(DeletedResponse {
        deleted_question: question_id,
    }))
}

pub async fn search_questions(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SearchRequest>,
) -> Result<Json<QuestionListResponse>> {
    let term = body.search_term.ok_or(ApiError::MissingField("searchTerm"))?;

    let questions = state.questions.search(&term).await?;
    let Some(first) = questions.first() else {
        return Err(ApiError::NotFound(format!("no questions matching {term:?}")));
    };

    let current_category = current_category(&state, first.category).await?;
    let total_questions = state.questions.count().await?;

    debug!(term = %term, count = questions.len(), "Searched questions");

    Ok(Json(QuestionListResponse {
        questions,
        total_questions,
        current_category,
    }))
}

pub async fn create_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>> {
    let (Some(question), Some(answer), Some(category), Some(difficulty)) =
        (body.question, body.answer, body.category, body.difficulty)
    else {
        return Err(ApiError::MissingField("question, answer, category and difficulty"));
    };

    let new = NewQuestion {
        question,
        answer,
        category: category.to_int("category")?,
        difficulty: difficulty.to_int("difficulty")?,
    };

    let stored = state.questions.insert(&new).await?;

    info!(
        question_id = stored.id,
        category = stored.category,
        "Created question"
    );

    Ok(Json(CreatedResponse {
        new_question_question: stored.question,
        new_question_answer: stored.answer,
        new_question_category: stored.category.to_string(),
        new_question_difficulty: stored.difficulty.to_string(),
    }))
}

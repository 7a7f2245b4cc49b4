use crate::AppState;
use crate::error::{ApiError, Result};
use crate::extract::JsonBody;
use crate::messages::{QuizRequest, QuizResponse};
use crate::trivia::core::QuestionScope;
use crate::trivia::quiz::{self, PreviousQuestions};
use axum::Json;
use axum::extract::State;
use tracing::debug;

pub async fn next_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>> {
    let category_id = body
        .quiz_category
        .ok_or(ApiError::MissingField("quizCategory"))?
        .to_int("quizCategory")?;

    let scope = QuestionScope::from_category_id(category_id);
    if let QuestionScope::Category(id) = scope
        && state.categories.find(id).await?.is_none()
    {
        return Err(ApiError::NotFound(format!("category {id}")));
    }

    let previous = PreviousQuestions::new(
        body.previous_questions
            .unwrap_or_default()
            .iter()
            .map(|id| id.to_int("previousQuestions"))
            .collect::<Result<Vec<_>>>()?,
    );

    let candidates = state
        .questions
        .quiz_candidates(scope, previous.as_slice())
        .await?;
    let remaining = candidates.len();

    let Some(question) = quiz::draw(candidates, &mut rand::rng()) else {
        let reason = if previous.is_empty() {
            format!("no questions in category {category_id}")
        } else {
            format!("quiz exhausted after {} questions", previous.len())
        };
        return Err(ApiError::NotFound(reason));
    };

    debug!(
        category_id,
        question_id = question.id,
        remaining,
        seen = previous.len(),
        "Drew quiz question"
    );

    Ok(Json(QuizResponse { question }))
}

use crate::error::ApiError;
use crate::trivia::core::{Category, Question};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An integer that clients may send as a JSON integer, a whole-valued
/// float (`2.0`) or a numeric string (`"2"`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NumberLike {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberLike {
    pub fn to_int(&self, field: &'static str) -> Result<i64, ApiError> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Float(f) if is_whole_i64(*f) => Ok(*f as i64),
            Self::Float(f) => Err(ApiError::MalformedBody(format!(
                "{field} is not a whole number: {f}"
            ))),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ApiError::MalformedBody(format!("{field} is not an integer: {s:?}"))),
        }
    }
}

/// `i64::MIN as f64` is exact; `i64::MAX as f64` rounds up to 2^63, so the
/// upper bound is exclusive.
fn is_whole_i64(f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

// ============ Requests ============

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_term: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<NumberLike>,
    pub difficulty: Option<NumberLike>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub quiz_category: Option<NumberLike>,
    pub previous_questions: Option<Vec<NumberLike>>,
}

// ============ Responses ============

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPageResponse {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
    pub current_category: String,
}

/// Questions filtered by search term or category
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub deleted_question: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub new_question_question: String,
    pub new_question_answer: String,
    pub new_question_category: String,
    pub new_question_difficulty: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Question,
}

use serde::Serialize;

/// A stored trivia question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A question that has not been stored yet
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionScope {
    All,
    Category(i64),
}

impl QuestionScope {
    /// Category id 0 stands for every category.
    pub fn from_category_id(id: i64) -> Self {
        match id {
            0 => Self::All,
            id => Self::Category(id),
        }
    }
}

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod messages;
mod trivia;

pub use trivia::core::{Category, NewQuestion, Question, QuestionScope};
pub use trivia::quiz;
pub use trivia::{CategoryRepository, QuestionRepository};

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{delete, get, post},
};
use error::ApiError;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use trivia::handlers;

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[derive(Clone)]
pub struct AppState {
    pub questions: QuestionRepository,
    pub categories: CategoryRepository,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            questions: QuestionRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool),
        }
    }
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

pub fn app(pool: SqlitePool) -> Router {
    let state = AppState::new(pool);

    Router::new()
        .route("/health", get(health))
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/{id}/questions",
            get(handlers::category_questions),
        )
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/search", post(handlers::search_questions))
        .route("/questions/delete/{id}", delete(handlers::delete_question))
        .route("/quizzes", post(handlers::next_question))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

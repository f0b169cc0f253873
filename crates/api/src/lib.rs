//! HTTP surface of the trivia service: routing, wire types, and status mapping.

use axum::{
    Router,
    routing::{delete, get, post},
};

pub mod categories_handlers;
pub mod dto;
pub mod error;
pub mod layers;
pub mod questions_handlers;
pub mod quizzes_handlers;
pub mod state;

pub use error::ApiError;
pub use layers::{CorsConfigError, create_app};
pub use state::ApiState;

/// Creates the trivia API router without transport layers.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/categories", get(categories_handlers::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_handlers::questions_in_category),
        )
        .route(
            "/questions",
            get(questions_handlers::list_questions).post(questions_handlers::post_questions),
        )
        .route(
            "/questions/{question_id}",
            delete(questions_handlers::delete_question),
        )
        .route("/quizzes", post(quizzes_handlers::next_question))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

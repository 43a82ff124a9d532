//! Router assembly

use axum::routing::{delete, get, post};
use axum::{middleware, Router};

use crate::state::AppState;
use crate::{cors, handlers};

/// Build the application router over the shared state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(handlers::get_categories))
        .route(
            "/categories/:id/questions",
            get(handlers::questions_by_category),
        )
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/search", post(handlers::search_questions))
        .route("/questions/:id", delete(handlers::delete_question))
        .route("/quizzes", post(handlers::play_quiz))
        .layer(middleware::from_fn(cors::apply_cors))
        .with_state(state)
}

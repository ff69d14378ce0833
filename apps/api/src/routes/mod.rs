pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::grading::handlers::handle_grade;
use crate::questions::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/grade", post(handle_grade))
        .route("/api/questions", get(handlers::handle_list_questions))
        .route("/api/questions/:id", get(handlers::handle_get_question))
        .route(
            "/api/questions/:id/grade",
            post(handlers::handle_grade_question),
        )
        .with_state(state)
}

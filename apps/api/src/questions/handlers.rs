//! Axum route handlers for the question bank.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::grading::handlers::grade_with;
use crate::models::grade::{GradeRequest, GradeResponse};
use crate::models::question::{Category, Difficulty, Question};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionFilter {
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub total: usize,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub user_answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/questions?category=&difficulty=
pub async fn handle_list_questions(
    State(state): State<AppState>,
    Query(filter): Query<QuestionFilter>,
) -> Json<QuestionListResponse> {
    let questions: Vec<Question> = state
        .questions
        .filter(filter.category, filter.difficulty)
        .into_iter()
        .cloned()
        .collect();

    Json(QuestionListResponse {
        total: questions.len(),
        questions,
    })
}

/// GET /api/questions/:id
pub async fn handle_get_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Question>, AppError> {
    state
        .questions
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))
}

/// POST /api/questions/:id/grade
///
/// Grades an answer against the bank's reference answer for `id`.
pub async fn handle_grade_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AnswerSubmission>, JsonRejection>,
) -> Result<Json<GradeResponse>, AppError> {
    let question = state
        .questions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))?;
    let Json(submission) = payload.map_err(|e| AppError::Grading(e.body_text()))?;

    let request = GradeRequest {
        question: question.question.clone(),
        user_answer: submission.user_answer,
        correct_answer: question.answer.clone(),
    };
    grade_with(&state, &request).await.map(Json)
}

//! Axum route handler for free-form answer grading.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::debug;

use crate::errors::AppError;
use crate::models::grade::{GradeRequest, GradeResponse};
use crate::state::AppState;

/// POST /api/grade
///
/// Grades `userAnswer` against `correctAnswer`. Any body that fails to parse,
/// including one missing either answer, is reported as a grading failure.
pub async fn handle_grade(
    State(state): State<AppState>,
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Result<Json<GradeResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Grading(e.body_text()))?;
    grade_with(&state, &request).await.map(Json)
}

/// Runs the configured grader, folding every failure into `AppError::Grading`.
pub(crate) async fn grade_with(
    state: &AppState,
    request: &GradeRequest,
) -> Result<GradeResponse, AppError> {
    let response = state
        .grader
        .grade(request)
        .await
        .map_err(|e| AppError::Grading(e.to_string()))?;

    debug!(
        score = response.score,
        strengths = response.strengths.len(),
        improvements = response.improvements.len(),
        "Graded answer"
    );
    Ok(response)
}

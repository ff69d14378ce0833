use std::sync::Arc;

use crate::grading::scorer::AnswerGrader;
use crate::questions::bank::QuestionBank;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable answer grader. Default: KeywordGrader.
    pub grader: Arc<dyn AnswerGrader>,
    /// Read-only after startup.
    pub questions: Arc<QuestionBank>,
}

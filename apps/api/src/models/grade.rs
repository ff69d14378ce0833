use serde::{Deserialize, Serialize};

/// Body of `POST /api/grade`.
///
/// `question` is carried for display only and never affects the score, so a
/// missing value is accepted. The two answers are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRequest {
    #[serde(default)]
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
}

/// Result of grading a single answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResponse {
    /// 0.0 – 1.0, rounded to two decimals
    pub score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

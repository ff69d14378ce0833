//! Answer scoring — pluggable, trait-based grader for free-text interview answers.
//!
//! Default: `KeywordGrader` (pure-Rust, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn AnswerGrader>`, chosen at startup.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::grading::concepts::extract_concepts;
use crate::grading::feedback::{build_improvements, build_strengths, feedback_for_score, Coverage};
use crate::grading::matcher::concepts_match;
use crate::models::grade::{GradeRequest, GradeResponse};

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

const CONCEPT_WEIGHT: f64 = 0.7;
const LENGTH_WEIGHT: f64 = 0.2;
const CODE_BONUS: f64 = 0.1;
/// An answer half as long as the reference earns the full length bonus.
const LENGTH_TARGET_RATIO: f64 = 0.5;

const CODE_MARKERS: &[&str] = &["```", "const ", "function "];

pub const NO_ANSWER_FEEDBACK: &str = "No answer provided.";
pub const NO_ANSWER_IMPROVEMENT: &str = "Provide an answer to receive feedback.";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Grades a user's answer against a reference answer. Implement this to swap
/// grading backends without touching handlers.
#[async_trait]
pub trait AnswerGrader: Send + Sync {
    async fn grade(&self, request: &GradeRequest) -> Result<GradeResponse, AppError>;
}

/// Keyword/concept heuristic grader.
///
/// score = min(concept_ratio × 0.7 + length_ratio × 0.2 + code_bonus, 1.0)
pub struct KeywordGrader;

#[async_trait]
impl AnswerGrader for KeywordGrader {
    async fn grade(&self, request: &GradeRequest) -> Result<GradeResponse, AppError> {
        Ok(grade_answer(request))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring
// ────────────────────────────────────────────────────────────────────────────

/// Intermediate values of one grading pass, before rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub target: Vec<String>,
    pub matched: Vec<String>,
    pub concept_score: f64,
    pub length_bonus: f64,
    pub code_bonus: f64,
    pub code_in_answer: bool,
    pub code_in_user: bool,
    pub score: f64,
}

/// Grades `request.user_answer` against `request.correct_answer`.
/// `request.question` does not influence the result.
pub fn grade_answer(request: &GradeRequest) -> GradeResponse {
    if request.user_answer.trim().is_empty() {
        return GradeResponse {
            score: 0.0,
            feedback: NO_ANSWER_FEEDBACK.to_string(),
            strengths: vec![],
            improvements: vec![NO_ANSWER_IMPROVEMENT.to_string()],
        };
    }

    let breakdown = score_breakdown(&request.user_answer, &request.correct_answer);
    debug!(
        target_concepts = breakdown.target.len(),
        matched_concepts = breakdown.matched.len(),
        concept_score = breakdown.concept_score,
        length_bonus = breakdown.length_bonus,
        code_bonus = breakdown.code_bonus,
        "Scored answer"
    );
    let coverage = Coverage {
        target: &breakdown.target,
        matched: &breakdown.matched,
        code_in_answer: breakdown.code_in_answer,
        code_in_user: breakdown.code_in_user,
    };

    GradeResponse {
        score: round_to_hundredths(breakdown.score),
        feedback: feedback_for_score(breakdown.score).to_string(),
        strengths: build_strengths(&coverage),
        improvements: build_improvements(&coverage),
    }
}

/// Computes every scoring component for a non-empty user answer.
pub fn score_breakdown(user_answer: &str, correct_answer: &str) -> ScoreBreakdown {
    let target = extract_concepts(correct_answer);
    let given = extract_concepts(user_answer);

    // many-to-one: a given concept may satisfy several targets
    let matched: Vec<String> = target
        .iter()
        .filter(|t| given.iter().any(|g| concepts_match(t, g)))
        .cloned()
        .collect();

    let concept_score = matched.len() as f64 / target.len().max(1) as f64;
    let length_bonus = length_ratio(user_answer, correct_answer) * LENGTH_WEIGHT;

    let code_in_answer = contains_code(correct_answer);
    let code_in_user = contains_code(user_answer);
    let code_bonus = if code_in_answer && code_in_user {
        CODE_BONUS
    } else {
        0.0
    };

    let score = (concept_score * CONCEPT_WEIGHT + length_bonus + code_bonus).min(1.0);

    ScoreBreakdown {
        target,
        matched,
        concept_score,
        length_bonus,
        code_bonus,
        code_in_answer,
        code_in_user,
        score,
    }
}

/// User answer length relative to half the reference length, capped at 1.0.
/// An empty reference gives the full ratio: any answer is at least as long.
/// Lengths are `char` counts, so an emoji counts once rather than as two UTF-16 units.
fn length_ratio(user_answer: &str, correct_answer: &str) -> f64 {
    let reference = correct_answer.chars().count() as f64 * LENGTH_TARGET_RATIO;
    if reference == 0.0 {
        return 1.0;
    }
    (user_answer.chars().count() as f64 / reference).min(1.0)
}

fn contains_code(text: &str) -> bool {
    CODE_MARKERS.iter().any(|marker| text.contains(marker))
}

fn round_to_hundredths(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

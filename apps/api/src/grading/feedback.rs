//! Feedback generation — turns a score and concept coverage into readable text.

use crate::grading::matcher::concepts_match;

pub const EXCELLENT: &str =
    "Excellent answer! You demonstrated a strong understanding of the key concepts.";
pub const GOOD: &str = "Good answer! You covered most of the important points.";
pub const PARTIAL: &str =
    "Partial answer. You touched on some key concepts but missed a few important ones.";
pub const BASIC: &str =
    "Basic attempt. Review the key concepts and try to explain them in more depth.";
pub const KEEP_PRACTICING: &str =
    "Keep practicing! Study the reference answer to learn the key concepts.";

/// How many concepts are named in a strengths or improvements entry.
const LISTED_CONCEPTS: usize = 3;

/// Concept coverage and code presence for one graded answer.
#[derive(Debug, Clone)]
pub struct Coverage<'a> {
    pub target: &'a [String],
    pub matched: &'a [String],
    pub code_in_answer: bool,
    pub code_in_user: bool,
}

/// Picks the feedback sentence for an unrounded score. First band that holds wins.
pub fn feedback_for_score(score: f64) -> &'static str {
    if score >= 0.8 {
        EXCELLENT
    } else if score >= 0.6 {
        GOOD
    } else if score >= 0.4 {
        PARTIAL
    } else if score >= 0.2 {
        BASIC
    } else {
        KEEP_PRACTICING
    }
}

pub fn build_strengths(coverage: &Coverage<'_>) -> Vec<String> {
    let mut strengths = Vec::new();

    if !coverage.matched.is_empty() {
        strengths.push(format!(
            "Correctly mentioned: {}",
            first_few(coverage.matched).join(", ")
        ));
    }
    if coverage.code_in_user {
        strengths.push("Included code examples to illustrate points".to_string());
    }
    if coverage.matched.len() > LISTED_CONCEPTS {
        strengths.push("Covered multiple relevant concepts".to_string());
    }

    strengths
}

pub fn build_improvements(coverage: &Coverage<'_>) -> Vec<String> {
    let mut improvements = Vec::new();

    let missed = missed_concepts(coverage.target, coverage.matched);
    if !missed.is_empty() {
        improvements.push(format!(
            "Consider mentioning: {}",
            first_few(&missed).join(", ")
        ));
    }
    if coverage.code_in_answer && !coverage.code_in_user {
        improvements.push("Include code examples to demonstrate understanding".to_string());
    }
    if (coverage.matched.len() as f64) < coverage.target.len() as f64 * 0.5 {
        improvements.push("Expand your answer to cover more key concepts".to_string());
    }

    improvements
}

/// Target concepts with no equivalent among the matched ones.
///
/// Compares target against matched, not against the user's raw concepts, so a
/// target that resembles a matched concept is not reported as missed.
pub fn missed_concepts(target: &[String], matched: &[String]) -> Vec<String> {
    target
        .iter()
        .filter(|t| !matched.iter().any(|m| concepts_match(m, t)))
        .cloned()
        .collect()
}

fn first_few(concepts: &[String]) -> Vec<&str> {
    concepts
        .iter()
        .take(LISTED_CONCEPTS)
        .map(String::as_str)
        .collect()
}

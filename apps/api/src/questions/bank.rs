//! Static interview question bank.
//!
//! The bundled bank is compiled into the binary; `QUESTION_BANK_PATH` swaps in
//! a JSON file with the same shape at startup.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::models::question::{Category, Difficulty, Question};

const BUNDLED_QUESTIONS: &str = include_str!("../../data/questions.json");

#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Loads the override file when given, the bundled bank otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let bank = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::bundled()?,
        };
        info!("Question bank loaded ({} questions)", bank.len());
        Ok(bank)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_QUESTIONS).context("Bundled question bank is invalid")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read question bank '{}'", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Question bank '{}' is invalid", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let questions: Vec<Question> =
            serde_json::from_str(raw).context("Question bank is not valid JSON")?;
        Self::new(questions)
    }

    /// Rejects an empty bank and duplicate ids.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            bail!("Question bank contains no questions");
        }

        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id.as_str()) {
                bail!("Duplicate question id '{}'", q.id);
            }
        }

        Ok(Self { questions })
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Questions matching every given filter, in bank order.
    pub fn filter(
        &self,
        category: Option<Category>,
        difficulty: Option<Difficulty>,
    ) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .filter(|q| difficulty.map_or(true, |d| q.difficulty == d))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

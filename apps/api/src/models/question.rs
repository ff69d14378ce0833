use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    React,
    Nextjs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single interview question with its reference answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_lowercase() {
        let c: Category = serde_json::from_str(r#""nextjs""#).unwrap();
        assert_eq!(c, Category::Nextjs);
        assert_eq!(serde_json::to_string(&Category::React).unwrap(), r#""react""#);
    }

    #[test]
    fn test_difficulty_rejects_unknown() {
        assert!(serde_json::from_str::<Difficulty>(r#""expert""#).is_err());
    }
}

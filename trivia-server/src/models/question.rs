//! Question records and creation input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Question record from database.
///
/// Serializes as `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Category id. Not checked against the categories table.
    pub category: i32,
    pub difficulty: i32,
}

/// A question that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Build a new question from optional request fields.
    ///
    /// `question`, `answer` and `category` are required; `difficulty`
    /// defaults to 0. Empty strings are accepted, and duplicates of an
    /// existing question's text are allowed.
    pub fn new(
        question: Option<String>,
        answer: Option<String>,
        category: Option<i32>,
        difficulty: Option<i32>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            question: question.ok_or(ValidationError::Missing { field: "question" })?,
            answer: answer.ok_or(ValidationError::Missing { field: "answer" })?,
            category: category.ok_or(ValidationError::Missing { field: "category" })?,
            difficulty: difficulty.unwrap_or(0),
        })
    }

    /// Attach a store-assigned id.
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_defaults_to_zero() {
        let q = NewQuestion::new(Some("Q?".into()), Some("A".into()), Some(1), None).unwrap();
        assert_eq!(q.difficulty, 0);
    }

    #[test]
    fn rejects_missing_answer() {
        let err = NewQuestion::new(Some("Q?".into()), None, Some(1), Some(2)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "answer" });
    }

    #[test]
    fn rejects_missing_category() {
        let err = NewQuestion::new(Some("Q?".into()), Some("A".into()), None, None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "category" });
    }

    #[test]
    fn accepts_empty_text() {
        assert!(NewQuestion::new(Some(String::new()), Some(String::new()), Some(4), None).is_ok());
    }

    #[test]
    fn serialized_shape() {
        let q = NewQuestion::new(Some("Q?".into()), Some("A".into()), Some(3), Some(5))
            .unwrap()
            .into_question(9);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 9,
                "question": "Q?",
                "answer": "A",
                "category": 3,
                "difficulty": 5
            })
        );
    }
}

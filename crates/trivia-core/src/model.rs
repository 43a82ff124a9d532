use serde::{Deserialize, Serialize};

use crate::errors::{Result, TriviaError};

/// Category - a labeled grouping of questions (e.g. "Art", "Science")
///
/// Categories are created at database seed time and are read-only
/// afterwards; no mutation endpoint exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, assigned by the store
    pub id: i64,

    /// Human-readable name
    pub name: String,
}

impl Category {
    /// Create a new Category with the given id and name
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Question - a quiz item with prompt text, answer text, difficulty
/// score, and a category reference
///
/// `category` is a soft reference: nothing enforces that a matching
/// Category row exists. Questions are created and deleted, never updated
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, assigned by the store, stable once assigned
    pub id: i64,

    /// Prompt text
    pub question: String,

    /// Answer text
    pub answer: String,

    /// Category id this question belongs to (unenforced reference)
    pub category: i64,

    /// Difficulty score
    pub difficulty: i64,
}

/// Payload for inserting a new question; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    /// Check the present-and-non-empty requirements for question creation
    ///
    /// `question` and `answer` must be non-empty. `category` is
    /// deliberately unchecked; an unknown category id is accepted.
    pub fn validate(&self) -> Result<()> {
        if self.question.trim().is_empty() {
            return Err(TriviaError::MissingField { field: "question" });
        }
        if self.answer.trim().is_empty() {
            return Err(TriviaError::MissingField { field: "answer" });
        }
        Ok(())
    }
}

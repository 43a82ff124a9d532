//! Request and response wire types
//!
//! One explicit struct per operation, deserialized and validated at the
//! boundary before any service runs. Handlers take the raw body bytes
//! and parse here, so syntactically broken JSON, a wrong-shaped
//! document, and a missing content-type header all land on the fixed
//! 400 body rather than a framework rejection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use trivia_core::errors::{Result, TriviaError};
use trivia_core::model::{Category, NewQuestion, Question};

/// Parse raw request body bytes into a typed request struct
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|err| TriviaError::InvalidInput {
        reason: err.to_string(),
    })
}

/// Query string for paginated listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Raw page value; kept as a string so a non-integer is rejected
    /// with the fixed 400 body rather than a framework rejection
    pub page: Option<String>,
}

impl ListQuery {
    /// Resolve the effective 1-based page index
    ///
    /// Absent means page 1. Zero and non-integer values are invalid.
    pub fn page(&self) -> Result<u32> {
        match self.page.as_deref() {
            None => Ok(1),
            Some(raw) => match raw.parse::<u32>() {
                Ok(page) if page >= 1 => Ok(page),
                _ => Err(TriviaError::InvalidInput {
                    reason: format!("invalid page value: {}", raw),
                }),
            },
        }
    }
}

/// Body of POST /questions/search
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

/// Body of POST /questions
///
/// All fields optional at the wire level; the required-field checks
/// produce typed errors below instead of deserialization failures.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<i64>,
    #[serde(default)]
    pub category: Option<i64>,
}

impl CreateQuestionRequest {
    /// Apply the required-field checks and produce the insert payload
    ///
    /// `category` is accepted silently when absent, defaulting to 0.
    pub fn into_new_question(self) -> Result<NewQuestion> {
        let difficulty = self
            .difficulty
            .ok_or(TriviaError::MissingField { field: "difficulty" })?;

        let new_question = NewQuestion {
            question: self.question.unwrap_or_default(),
            answer: self.answer.unwrap_or_default(),
            category: self.category.unwrap_or(0),
            difficulty,
        };
        new_question.validate()?;
        Ok(new_question)
    }
}

/// Category selector inside a quiz request; id 0 means any category
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub label: Option<String>,
}

/// Body of POST /quizzes
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// Response of GET /categories
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
    pub total: usize,
}

/// Response of the question listing endpoints
///
/// Only the full listing carries the category catalog alongside.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    pub total_questions: usize,
}

/// Response of the create and delete mutations
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
}

/// Response of POST /quizzes
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
    pub end: bool,
}

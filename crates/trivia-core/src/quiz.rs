//! Quiz round selection
//!
//! Draws one unseen question uniformly at random from a category-scoped
//! candidate pool. Stateless: the caller accumulates the seen-id set
//! between rounds.

use std::collections::HashSet;

use rand::Rng;

use crate::errors::{Result, TriviaError};
use crate::model::Question;

/// Result of one quiz round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPick {
    pub question: Question,

    /// True when every candidate has already been served. The question
    /// is then a re-serve of the first candidate, marking game over.
    pub end: bool,
}

/// Pick one question from `candidates` whose id is not in `previous`
///
/// `candidates` is the category-scoped pool, ordered by ascending id:
/// on exhaustion the first candidate is re-served with `end = true`.
/// An empty pool is an invalid request, not a draw; `category_id` is
/// carried for the error report only.
pub fn select_question<R: Rng>(
    candidates: &[Question],
    previous: &HashSet<i64>,
    category_id: i64,
    rng: &mut R,
) -> Result<QuizPick> {
    if candidates.is_empty() {
        return Err(TriviaError::NoQuestionsAvailable { category_id });
    }

    let available: Vec<&Question> = candidates
        .iter()
        .filter(|question| !previous.contains(&question.id))
        .collect();

    tracing::debug!(
        category_id,
        candidates = candidates.len(),
        available = available.len(),
        "quiz draw"
    );

    if available.is_empty() {
        return Ok(QuizPick {
            question: candidates[0].clone(),
            end: true,
        });
    }

    let index = rng.gen_range(0..available.len());
    Ok(QuizPick {
        question: available[index].clone(),
        end: false,
    })
}

//! Listing assembly over pre-fetched question rows
//!
//! The store returns id-ascending rows; these helpers slice them into
//! the wire-facing page plus the unpaginated total. They hold no state
//! of their own.

use crate::errors::{Result, TriviaError};
use crate::model::Question;
use crate::pagination::{paginate, QUESTIONS_PER_PAGE};

/// One page of questions plus the unpaginated total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Page the full question listing
///
/// An empty page is an error here: the listing endpoint reports it as
/// not-found, including the legitimate page-past-the-end case.
pub fn list_all(questions: &[Question], page: u32) -> Result<QuestionPage> {
    let page_items = paginate(questions, page, QUESTIONS_PER_PAGE);
    if page_items.is_empty() {
        return Err(TriviaError::EmptyPage { page });
    }
    Ok(QuestionPage {
        questions: page_items.to_vec(),
        total_questions: questions.len(),
    })
}

/// Page a search result
///
/// An empty result set is a success with a zero total, not an error.
pub fn search_results(matches: &[Question], page: u32) -> QuestionPage {
    QuestionPage {
        questions: paginate(matches, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: matches.len(),
    }
}

/// Page a category-scoped listing
///
/// Unknown category ids arrive here as an empty slice and are served as
/// an empty success; there is no existence check on the category.
pub fn by_category(matches: &[Question], page: u32) -> QuestionPage {
    search_results(matches, page)
}

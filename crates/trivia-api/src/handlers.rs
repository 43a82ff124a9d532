//! Route handlers
//!
//! Each handler validates its input at the boundary, runs the store
//! queries under the connection lock, and hands the rows to the core
//! services.

use std::collections::HashSet;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::Json;
use rand::thread_rng;

use trivia_core::{listing, quiz};
use trivia_store::{CategoryRepo, QuestionRepo};

use crate::dto::{
    parse_body, CategoriesResponse, CreateQuestionRequest, ListQuery, MutationResponse,
    QuestionListResponse, QuizRequest, QuizResponse, SearchRequest,
};
use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// GET /categories
pub async fn get_categories(State(state): State<AppState>) -> ApiResult<CategoriesResponse> {
    let categories = state.with_conn(CategoryRepo::list_all)?;
    let total = categories.len();

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
        total,
    }))
}

/// GET /questions?page=N
///
/// An empty page, including a page index past the data, is a 404.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<QuestionListResponse> {
    let page = query.page()?;

    let (questions, categories) = state.with_conn(|conn| {
        Ok((QuestionRepo::list_all(conn)?, CategoryRepo::list_all(conn)?))
    })?;
    let page_of = listing::list_all(&questions, page)?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page_of.questions,
        categories: Some(categories),
        total_questions: page_of.total_questions,
    }))
}

/// POST /questions/search
pub async fn search_questions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    body: Bytes,
) -> ApiResult<QuestionListResponse> {
    let request: SearchRequest = parse_body(&body)?;
    let page = query.page()?;

    let matches = state.with_conn(|conn| QuestionRepo::search(conn, &request.search_term))?;
    let page_of = listing::search_results(&matches, page);

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page_of.questions,
        categories: None,
        total_questions: page_of.total_questions,
    }))
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<MutationResponse> {
    let request: CreateQuestionRequest = parse_body(&body)?;
    let new_question = request.into_new_question()?;

    let id = state.with_conn(|conn| QuestionRepo::insert(conn, &new_question))?;
    tracing::info!(id, "question created");

    Ok(Json(MutationResponse { success: true }))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<MutationResponse> {
    state.with_conn(|conn| QuestionRepo::delete(conn, id))?;
    tracing::info!(id, "question deleted");

    Ok(Json(MutationResponse { success: true }))
}

/// GET /categories/{id}/questions
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> ApiResult<QuestionListResponse> {
    let page = query.page()?;

    let matches = state.with_conn(|conn| QuestionRepo::by_category(conn, id))?;
    let page_of = listing::by_category(&matches, page);

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page_of.questions,
        categories: None,
        total_questions: page_of.total_questions,
    }))
}

/// POST /quizzes
///
/// Category id 0 draws from all questions. The caller carries the
/// previously served ids between rounds.
pub async fn play_quiz(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<QuizResponse> {
    let request: QuizRequest = parse_body(&body)?;

    let candidates = state.with_conn(|conn| {
        if request.quiz_category.id == 0 {
            QuestionRepo::list_all(conn)
        } else {
            QuestionRepo::by_category(conn, request.quiz_category.id)
        }
    })?;

    let previous: HashSet<i64> = request.previous_questions.iter().copied().collect();
    let pick = quiz::select_question(
        &candidates,
        &previous,
        request.quiz_category.id,
        &mut thread_rng(),
    )?;

    Ok(Json(QuizResponse {
        success: true,
        question: pick.question,
        end: pick.end,
    }))
}

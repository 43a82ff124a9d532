//! HTTP error responses
//!
//! Maps the core error taxonomy onto the fixed status/message table the
//! wire contract specifies. The mapping goes through the error kind
//! only, never by inspecting individual variants.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use trivia_core::errors::{ErrorKind, TriviaError};

/// Fixed wire body for every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

/// Wrapper making TriviaError usable as an axum rejection
#[derive(Debug)]
pub struct ApiError(pub TriviaError);

impl From<TriviaError> for ApiError {
    fn from(err: TriviaError) -> Self {
        Self(err)
    }
}

/// The fixed status/message table
///
/// The 500 message keeps the deployed spelling ("occured") for wire
/// compatibility.
fn status_and_message(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::BadRequest => (StatusCode::BAD_REQUEST, "Bad request error"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Resource not found"),
        ErrorKind::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable entity"),
        ErrorKind::Internal => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An error has occured, please try again",
        ),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(self.0.kind());
        tracing::warn!(code = self.0.code(), detail = %self.0, "request failed");

        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

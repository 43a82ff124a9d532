use thiserror::Error;

/// Result type alias using TriviaError
pub type Result<T> = std::result::Result<T, TriviaError>;

/// Canonical error kind taxonomy
///
/// Stable classification of every error in the system. The HTTP boundary
/// picks a response status from the kind alone; it never inspects the
/// underlying error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or incomplete request input
    BadRequest,
    /// A paginated listing with no rows on the requested page
    NotFound,
    /// A mutation aimed at a row that does not exist
    Unprocessable,
    /// Database or other unexpected failure
    Internal,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "ERR_BAD_REQUEST",
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::Unprocessable => "ERR_UNPROCESSABLE",
            ErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Error taxonomy for trivia operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriviaError {
    /// Required create-question field is absent or empty
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Request input failed boundary validation
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Paginated listing produced no rows for the requested page
    #[error("No questions on page {page}")]
    EmptyPage { page: u32 },

    /// Mutation referenced a question id with no backing row
    #[error("Question not found: {id}")]
    QuestionNotFound { id: i64 },

    /// Quiz selection ran against an empty candidate pool
    #[error("No questions available for quiz category {category_id}")]
    NoQuestionsAvailable { category_id: i64 },

    /// Database failure
    #[error("Persistence error in {op}: {message}")]
    Persistence { op: String, message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TriviaError {
    /// Classify this error into the canonical kind taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::MissingField { .. }
            | TriviaError::InvalidInput { .. }
            | TriviaError::NoQuestionsAvailable { .. } => ErrorKind::BadRequest,
            TriviaError::EmptyPage { .. } => ErrorKind::NotFound,
            TriviaError::QuestionNotFound { .. } => ErrorKind::Unprocessable,
            TriviaError::Persistence { .. }
            | TriviaError::Serialization { .. }
            | TriviaError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

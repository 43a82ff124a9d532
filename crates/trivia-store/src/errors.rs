//! Error handling for trivia-store
//!
//! Wraps the trivia-core error facility with store-specific helpers

use trivia_core::errors::TriviaError;

/// Result type alias using TriviaError
pub type Result<T> = std::result::Result<T, TriviaError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> TriviaError {
    TriviaError::Persistence {
        op: "migration".to_string(),
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> TriviaError {
    TriviaError::Persistence {
        op: "sqlite".to_string(),
        message: err.to_string(),
    }
}

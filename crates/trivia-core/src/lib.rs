//! Trivia core - domain models and rule-bearing services
//!
//! Provides:
//! - Category and Question domain models
//! - Canonical error facility with stable codes
//! - Pagination, listing assembly, and quiz selection
//!
//! This crate does no I/O. The listing and quiz services are pure
//! functions over rows the store has already fetched, plus request
//! parameters.

pub mod errors;
pub mod listing;
pub mod model;
pub mod pagination;
pub mod quiz;

// Re-export key types
pub use errors::{ErrorKind, Result, TriviaError};
pub use model::{Category, NewQuestion, Question};

//! Trivia store - SQLite persistence layer
//!
//! Provides:
//! - SQLite connection management
//! - Embedded schema migrations with checksums and idempotent application
//! - Category and question repositories
//! - Seed importer for the canonical trivia data set

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::{CategoryRepo, QuestionRepo};

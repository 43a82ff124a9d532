//! Schema migrations
//!
//! The SQL is embedded in the binary and applied once per migration id,
//! with a SHA-256 digest recorded alongside each applied entry.

mod embedded;
mod runner;

pub use runner::apply_migrations;

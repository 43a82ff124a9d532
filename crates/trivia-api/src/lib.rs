//! Trivia API - HTTP surface
//!
//! Routes requests into the store and core services and formats the JSON
//! wire responses. Error responses follow a fixed status/message table
//! keyed by the core error kind.

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export key types
pub use routes::build_router;
pub use state::AppState;

//! Shared handler state

use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use trivia_core::errors::{Result, TriviaError};

/// One SQLite connection behind a mutex, injected into every handler
///
/// Handlers lock for the duration of the synchronous database round-trip,
/// which serializes request processing the way the backing store expects.
/// No other shared mutable state exists.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run `f` with the locked connection
    ///
    /// A poisoned lock is reported as an internal error instead of
    /// propagating the panic.
    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let guard = self.conn.lock().map_err(|_| TriviaError::Internal {
            message: "connection lock poisoned".to_string(),
        })?;
        f(&guard)
    }
}

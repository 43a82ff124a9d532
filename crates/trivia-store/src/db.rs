//! SQLite connection setup
//!
//! The server holds a single connection for its whole lifetime, so the
//! helpers here only cover opening one and applying the pragmas it
//! runs with.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open the trivia database file, creating it if absent
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open a throwaway in-memory database, used by the test suites
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Apply the pragmas the server runs with
pub fn configure(conn: &Connection) -> Result<()> {
    // Foreign keys stay enabled even though the trivia schema declares
    // none; question.category is a soft reference on purpose
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite)?;

    // WAL keeps readers unblocked during writes
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(from_rusqlite)?;

    Ok(())
}

//! Category repository
//!
//! Categories are seeded once and read-only afterwards; the only
//! mutation here is the insert the seed importer uses.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use trivia_core::model::Category;

/// SQLite repository for categories
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by ascending id
    pub fn list_all(conn: &Connection) -> Result<Vec<Category>> {
        let mut stmt = conn
            .prepare("SELECT id, name FROM categories ORDER BY id ASC")
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// Count category rows (used by the seed importer's idempotency check)
    pub fn count(conn: &Connection) -> Result<usize> {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(count as usize)
    }

    /// Insert a category with an explicit id, returning the id
    pub fn insert(conn: &Connection, id: i64, name: &str) -> Result<i64> {
        conn.execute(
            "INSERT INTO categories (id, name) VALUES (?1, ?2)",
            rusqlite::params![id, name],
        )
        .map_err(from_rusqlite)?;

        Ok(id)
    }
}

//! Question repository
//!
//! All listings come back ordered by ascending id; the services layer
//! relies on that ordering for pagination and for the quiz game-over
//! re-serve.

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use trivia_core::errors::TriviaError;
use trivia_core::model::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQLite repository for questions
pub struct QuestionRepo;

impl QuestionRepo {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
        Ok(Question {
            id: row.get(0)?,
            question: row.get(1)?,
            answer: row.get(2)?,
            category: row.get(3)?,
            difficulty: row.get(4)?,
        })
    }

    fn collect(conn: &Connection, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<Question>> {
        let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(params, Self::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    /// Insert a question, returning the store-assigned id
    pub fn insert(conn: &Connection, question: &NewQuestion) -> Result<i64> {
        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                question.question,
                question.answer,
                question.category,
                question.difficulty,
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Get a question by id
    pub fn get(conn: &Connection, id: i64) -> Result<Option<Question>> {
        let sql = format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS);
        conn.query_row(&sql, [id], Self::from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    /// Delete a question by id
    ///
    /// Deleting an id with no backing row is an error, not a no-op.
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        let deleted = conn
            .execute("DELETE FROM questions WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;

        if deleted == 0 {
            return Err(TriviaError::QuestionNotFound { id });
        }
        Ok(())
    }

    /// List all questions ordered by ascending id
    pub fn list_all(conn: &Connection) -> Result<Vec<Question>> {
        let sql = format!("SELECT {} FROM questions ORDER BY id ASC", QUESTION_COLUMNS);
        Self::collect(conn, &sql, rusqlite::params![])
    }

    /// List questions whose text contains `term` as a substring, ordered
    /// by ascending id
    ///
    /// An empty term matches every question. Matching follows SQLite's
    /// LIKE collation (case-insensitive for ASCII).
    pub fn search(conn: &Connection, term: &str) -> Result<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions
             WHERE question LIKE '%' || ?1 || '%'
             ORDER BY id ASC",
            QUESTION_COLUMNS
        );
        Self::collect(conn, &sql, rusqlite::params![term])
    }

    /// List questions in the given category, ordered by ascending id
    ///
    /// No existence check on the category id; unknown categories yield
    /// an empty result.
    pub fn by_category(conn: &Connection, category_id: i64) -> Result<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions WHERE category = ?1 ORDER BY id ASC",
            QUESTION_COLUMNS
        );
        Self::collect(conn, &sql, rusqlite::params![category_id])
    }
}

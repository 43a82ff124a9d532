//! Canonical trivia seed data
//!
//! The 6 categories and 19 questions the deployed API ships with.
//! Question ids are explicit (the original data set has gaps from old
//! deletions); SQLite keeps its id sequence above the seeded maximum, so
//! later inserts never collide.

use crate::errors::{from_rusqlite, Result};
use crate::repo::CategoryRepo;
use rusqlite::Connection;

const CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

// (id, question, answer, category, difficulty)
const QUESTIONS: [(i64, &str, &str, i64, i64); 19] = [
    (
        2,
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        5,
        4,
    ),
    (
        4,
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        5,
        4,
    ),
    (
        5,
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        4,
        2,
    ),
    (
        6,
        "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
        "Edward Scissorhands",
        5,
        3,
    ),
    (9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    (
        10,
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        6,
        3,
    ),
    (
        11,
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        6,
        4,
    ),
    (12, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    (13, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (
        14,
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        3,
    ),
    (15, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (
        16,
        "Which Dutch graphic artist is famous for his mind-bending optical illusion prints?",
        "Escher",
        2,
        1,
    ),
    (17, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    (18, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    (
        19,
        "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
        "Jackson Pollock",
        2,
        2,
    ),
    (20, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
    (21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (
        22,
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        1,
        4,
    ),
    (
        23,
        "Which dung beetle was worshipped by the ancient Egyptians?",
        "Scarab",
        4,
        4,
    ),
];

/// Load the canonical seed data, returning the number of questions
/// inserted
///
/// Idempotent: a database that already holds any category row is left
/// untouched.
pub fn load_seed_data(conn: &Connection) -> Result<usize> {
    if CategoryRepo::count(conn)? > 0 {
        tracing::debug!("seed skipped, categories already present");
        return Ok(0);
    }

    for (id, name) in CATEGORIES {
        CategoryRepo::insert(conn, id, name)?;
    }

    for (id, question, answer, category, difficulty) in QUESTIONS {
        conn.execute(
            "INSERT INTO questions (id, question, answer, category, difficulty)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![id, question, answer, category, difficulty],
        )
        .map_err(from_rusqlite)?;
    }

    tracing::info!(
        categories = CATEGORIES.len(),
        questions = QUESTIONS.len(),
        "seed data loaded"
    );

    Ok(QUESTIONS.len())
}

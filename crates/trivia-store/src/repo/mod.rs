//! Repository layer for categories and questions
//!
//! Associated functions over an explicit `&Connection` handle; no global
//! database state anywhere.

pub mod category_repo;
pub mod question_repo;

pub use category_repo::CategoryRepo;
pub use question_repo::QuestionRepo;

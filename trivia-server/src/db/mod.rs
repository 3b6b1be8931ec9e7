//! Database layer - store trait, backends, migrations
//!
//! Handlers only see `dyn TriviaStore`. Two backends implement it:
//!
//! - `PgStore`: PostgreSQL through a sqlx connection pool
//! - `MemoryStore`: process-local, used by tests and `--in-memory` runs
//!
//! Every list operation returns rows ordered by id ascending.

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod seed;

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Question};

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Persistent store for questions and categories
#[async_trait]
pub trait TriviaStore: Send + Sync + 'static {
    /// All categories, ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, DbError>;

    /// Number of stored categories.
    async fn count_categories(&self) -> Result<i64, DbError>;

    /// Add a category, returning it with its assigned id.
    async fn insert_category(&self, kind: &str) -> Result<Category, DbError>;

    /// All questions, ordered by id.
    async fn questions(&self) -> Result<Vec<Question>, DbError>;

    /// Questions whose category equals `category`, ordered by id.
    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError>;

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    ///
    /// `term` is matched literally; an empty term matches everything.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError>;

    /// Persist a new question, returning it with its assigned id.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError>;

    /// Delete a question by id.
    ///
    /// Returns `DbError::NotFound` when no question has that id.
    async fn delete_question(&self, id: i32) -> Result<(), DbError>;
}

pub(crate) fn question_not_found(id: i32) -> DbError {
    DbError::NotFound {
        resource: "question",
        id: id.to_string(),
    }
}

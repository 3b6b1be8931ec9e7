//! PostgreSQL store
//!
//! One query per operation; deletion uses `DELETE ... RETURNING` so a
//! missing row is detected without a separate lookup.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{question_not_found, DbError, TriviaStore};
use crate::models::{Category, NewQuestion, Question};

/// Store backed by a sqlx connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Escape LIKE metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query_as::<_, Category>(
            r#"SELECT id, type FROM categories ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count_categories(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert_category(&self, kind: &str) -> Result<Category, DbError> {
        let category = sqlx::query_as::<_, Category>(
            r#"INSERT INTO categories (type) VALUES ($1) RETURNING id, type"#,
        )
        .bind(kind)
        .fetch_one(&self.pool)
        .await?;
        Ok(category)
    }

    async fn questions(&self) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(escape_like(term))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await?;
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        sqlx::query_scalar::<_, i32>("DELETE FROM questions WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| question_not_found(id))?;
        Ok(())
    }
}

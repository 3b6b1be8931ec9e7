//! In-memory store
//!
//! Same contract as the PostgreSQL store: ids are assigned from a
//! counter starting at 1 and never reused, listings are ordered by id.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{question_not_found, DbError, TriviaStore};
use crate::models::{Category, NewQuestion, Question};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, String>,
    questions: BTreeMap<i32, Question>,
    last_category_id: i32,
    last_question_id: i32,
}

/// Process-local store; contents are lost on shutdown
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered<F>(&self, keep: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        let tables = self.tables.read().await;
        tables.questions.values().filter(|q| keep(q)).cloned().collect()
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .map(|(id, kind)| Category {
                id: *id,
                kind: kind.clone(),
            })
            .collect())
    }

    async fn count_categories(&self) -> Result<i64, DbError> {
        Ok(self.tables.read().await.categories.len() as i64)
    }

    async fn insert_category(&self, kind: &str) -> Result<Category, DbError> {
        let mut tables = self.tables.write().await;
        tables.last_category_id += 1;
        let id = tables.last_category_id;
        tables.categories.insert(id, kind.to_owned());
        Ok(Category {
            id,
            kind: kind.to_owned(),
        })
    }

    async fn questions(&self) -> Result<Vec<Question>, DbError> {
        Ok(self.filtered(|_| true).await)
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        Ok(self.filtered(|q| q.category == category).await)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let needle = term.to_lowercase();
        Ok(self
            .filtered(|q| q.question.to_lowercase().contains(&needle))
            .await)
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.write().await;
        tables.last_question_id += 1;
        let question = new.with_id(tables.last_question_id);
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        self.tables
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| question_not_found(id))
    }
}

//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use serde::Serialize;

use crate::models::{CategoryMap, Question};

/// One page of questions plus the size of the full result set
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
}

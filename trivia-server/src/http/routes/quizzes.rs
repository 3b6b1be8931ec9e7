//! Quiz play endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{next_question, CategoryRef, Question};

/// Category the quiz is played in; `id` 0 means all categories
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: CategoryRef,
}

/// Next-question request
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// Next question, or null once the quiz is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub question: Option<Question>,
}

/// POST /quizzes - next question for a quiz in progress
async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let candidates = match req.quiz_category.id {
        CategoryRef::All => state.store.questions().await?,
        CategoryRef::Id(id) => state.store.questions_in_category(id).await?,
        CategoryRef::Unmatched => Vec::new(),
    };

    if candidates.is_empty() {
        return Err(ApiError::not_found("quiz category", format!("{:?}", req.quiz_category.id)));
    }

    let question = next_question(candidates, &req.previous_questions);
    if question.is_none() {
        tracing::debug!(asked = req.previous_questions.len(), "quiz exhausted");
    }

    Ok(Json(QuizResponse { question }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_quiz_question))
}

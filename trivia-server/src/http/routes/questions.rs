//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::QuestionPage;
use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PageQuery, QuestionId};
use crate::http::server::AppState;
use crate::models::{category_map, NewQuestion, NO_CATEGORY};

/// Search request
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// Absent or null searches with an empty term, matching everything
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Create question response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
}

/// Delete question response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

/// GET /questions - one page of all questions, plus every category
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionPage>, ApiError> {
    let questions = state.store.questions().await?;
    let selected = page.slice(&questions);
    let categories = category_map(state.store.as_ref()).await?;

    if selected.is_empty() {
        return Err(ApiError::not_found("question page", page.number()));
    }

    Ok(Json(QuestionPage {
        questions: selected.to_vec(),
        total_questions: questions.len(),
        current_category: NO_CATEGORY,
        categories: Some(categories),
    }))
}

/// POST /questions - case-insensitive substring search on question text
///
/// No matches is a successful, empty page.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<QuestionPage>, ApiError> {
    let term = req.search_term.unwrap_or_default();
    let matches = state.store.search_questions(&term).await?;
    tracing::debug!(%term, matches = matches.len(), "question search");

    Ok(Json(QuestionPage {
        questions: page.slice(&matches).to_vec(),
        total_questions: matches.len(),
        current_category: NO_CATEGORY,
        categories: None,
    }))
}

/// POST /add - store a new question
async fn create_question(
    State(state): State<Arc<AppState>>,
    JsonBody(new): JsonBody<NewQuestion>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let question = state.store.insert_question(new).await?;
    tracing::info!(question_id = question.id, category = question.category, "question created");

    Ok(Json(CreatedResponse { success: true }))
}

/// DELETE /questions/{id} - remove a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    QuestionId(id): QuestionId,
) -> Result<Json<DeletedResponse>, ApiError> {
    match state.store.delete_question(id).await {
        Ok(()) => {
            tracing::info!(question_id = id, "question deleted");
            Ok(Json(DeletedResponse {
                success: true,
                deleted: id,
            }))
        }
        // Deleting an unknown id answers 422, not 404. Existing clients
        // and tests depend on this.
        Err(DbError::NotFound { .. }) => Err(ApiError::Unprocessable {
            reason: format!("question {id} does not exist"),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .route("/add", post(create_question))
}

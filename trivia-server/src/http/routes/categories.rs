//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::QuestionPage;
use crate::http::error::ApiError;
use crate::http::extractors::PageQuery;
use crate::http::server::AppState;
use crate::models::category::{category_map, parse_category_id, CategoryMap};

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

/// GET /categories - id -> type for every category
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = category_map(state.store.as_ref()).await?;
    if categories.is_empty() {
        return Err(ApiError::not_found("categories", "*"));
    }

    Ok(Json(CategoriesResponse { categories }))
}

/// GET /categories/{category_id}/questions - one page of a category's questions
///
/// `current_category` echoes the parsed integer id rather than the raw
/// path segment, so `/categories/02/questions` reports `2`. The id does
/// not have to exist in the category table; questions filed under an
/// unknown category are still listed.
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionPage>, ApiError> {
    // A non-numeric id cannot match any question.
    let Some(category) = parse_category_id(&raw_id) else {
        return Err(ApiError::not_found("category", raw_id));
    };

    let questions = state.store.questions_in_category(category).await?;
    let selected = page.slice(&questions);
    if selected.is_empty() {
        return Err(ApiError::not_found("category page", format!("{category}/{}", page.number())));
    }

    Ok(Json(QuestionPage {
        questions: selected.to_vec(),
        total_questions: questions.len(),
        current_category: category,
        categories: None,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(list_category_questions))
}

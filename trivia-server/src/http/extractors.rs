//! Custom Axum extractors
//!
//! Rejections from the stock extractors are turned into `ApiError` so
//! every failure carries the uniform error body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::pagination::{Page, PageParams};

/// JSON request body.
///
/// Missing or mistyped fields are 422, anything that is not a JSON
/// document (bad syntax, wrong content type) is 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => Err(ApiError::Unprocessable {
                reason: e.body_text(),
            }),
            Err(rejection) => Err(ApiError::BadRequest {
                reason: rejection.body_text(),
            }),
        }
    }
}

/// Question id from the path.
///
/// A segment that is not an integer cannot name a question route, so it
/// is reported as not found.
pub struct QuestionId(pub i32);

impl<S> FromRequestParts<S> for QuestionId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("question", "<missing>"))?;

        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| ApiError::not_found("question", raw))
    }
}

/// Requested page from `?page=N`; never rejects.
pub struct PageQuery(pub Page);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let page = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| Page::from(params))
            .unwrap_or_default();
        Ok(Self(page))
    }
}

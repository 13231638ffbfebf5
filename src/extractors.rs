use std::convert::Infallible;

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{engine::PageNumber, rejections::AppError};

#[derive(Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// Reads `?page=N`. Missing or malformed values fall back to the first page.
pub struct Page(pub PageNumber);

impl<S: Send + Sync> FromRequestParts<S> for Page {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let page = Query::<PageQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.page);
        Ok(Page(PageNumber::parse(page.as_deref())))
    }
}

/// Integer id from the path. Anything that is not an integer is treated as
/// an unknown route.
pub struct Id(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for Id {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("rejected path id: {e}");
                AppError::NotFound
            })?;
        Ok(Id(id))
    }
}

/// JSON body whose extraction failures render as `BadRequest`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("rejected request body: {e}");
            AppError::BadRequest
        })?;
        Ok(JsonBody(value))
    }
}

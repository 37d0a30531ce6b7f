//! API handlers for the book registry REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde_json::{Map, Value};

use crate::error::AppError;

/// JSON object body extractor.
///
/// Only malformed JSON is rejected. Field types are never checked here, and
/// a body that is missing, empty, not declared as JSON or not an object is
/// read as an empty object, so a bare POST reaches validation and a bare PUT
/// updates nothing.
pub struct JsonBody<T>(pub T);

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().to_ascii_lowercase().ends_with("json"))
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: From<Map<String, Value>> + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if !is_json || bytes.is_empty() {
            return Ok(JsonBody(T::from(Map::new())));
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(JsonBody(T::from(map))),
            Ok(_) => Ok(JsonBody(T::from(Map::new()))),
            Err(e) => Err(AppError::BadRequest(e.to_string())),
        }
    }
}

//! Error types for the book registry

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned when a book id matches no record
pub const BOOK_NOT_FOUND: &str = "Book not found";

/// Message returned when a create request lacks title, author or genre
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// Message returned when the request body is not the expected JSON
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn book_not_found() -> Self {
        AppError::NotFound(BOOK_NOT_FOUND.to_string())
    }

    pub fn missing_required_fields() -> Self {
        AppError::Validation(MISSING_REQUIRED_FIELDS.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::BadRequest(msg) => msg,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Book not found")]
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::BadRequest(detail) = &self {
            tracing::debug!("Rejected request body: {}", detail);
        }

        let body = Json(ErrorResponse {
            error: match &self {
                // The rejection detail stays in the logs; clients get a stable message
                AppError::BadRequest(_) => INVALID_JSON_BODY.to_string(),
                other => other.message().to_string(),
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

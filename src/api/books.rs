//! Book API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::book::{parse_book_id, Book, CreateBook, UpdateBook},
    AppState,
};

use super::JsonBody;

/// Resolve a path segment to a book id; unparseable ids are simply not found
fn book_id(segment: &str) -> AppResult<i64> {
    parse_book_id(segment).ok_or_else(AppError::book_not_found)
}

/// List all books
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(book_id(&id)?).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing required fields", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(data): JsonBody<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(book_id(&id)?, &data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.books.delete(book_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Book service

use serde_json::Value;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{is_truthy, Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.books.list().await)
    }

    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a book after checking title, author and genre are all given
    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        data.validate().map_err(|e| {
            tracing::debug!("Rejected book creation: {}", e);
            AppError::missing_required_fields()
        })?;

        let CreateBook {
            title: Some(title),
            author: Some(author),
            genre: Some(genre),
            copies_available,
        } = data
        else {
            return Err(AppError::missing_required_fields());
        };

        let copies_available = copies_available
            .filter(is_truthy)
            .unwrap_or_else(|| Value::from(0));

        let book = self
            .repository
            .books
            .create(title, author, genre, copies_available)
            .await;
        Ok(book)
    }

    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        self.repository.books.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}

//! In-memory book collection

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, UpdateBook},
};

/// Ordered book collection shared by all handlers.
///
/// Every operation runs under a single lock acquisition, so readers never
/// observe a half-applied mutation.
#[derive(Clone, Debug)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    /// Create a repository holding the seed records
    pub fn new() -> Self {
        Self::with_books(Book::seed())
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// All books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    /// First book whose id matches
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(AppError::book_not_found)
    }

    /// Append a book; its id is the collection size plus one
    pub async fn create(
        &self,
        title: Value,
        author: Value,
        genre: Value,
        copies_available: Value,
    ) -> Book {
        let mut books = self.books.write().await;
        let book = Book {
            id: books.len() as i64 + 1,
            title,
            author,
            genre,
            copies_available,
        };
        books.push(book.clone());
        tracing::info!("Created book {} ({})", book.id, book.title);
        book
    }

    /// Apply a partial update to the first book whose id matches
    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(AppError::book_not_found)?;
        book.apply_update(data);
        tracing::debug!("Updated book {}", id);
        Ok(book.clone())
    }

    /// Remove the first book whose id matches
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(AppError::book_not_found)?;
        books.remove(index);
        tracing::info!("Deleted book {}", id);
        Ok(())
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}

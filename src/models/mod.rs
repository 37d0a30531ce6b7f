//! Data models for the book registry

pub mod book;

// Re-export commonly used types
pub use book::{parse_book_id, Book, CreateBook, UpdateBook};

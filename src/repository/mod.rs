//! Repository layer owning the in-memory collections

pub mod books;

/// Main repository struct holding every collection
#[derive(Clone, Debug, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository with freshly seeded collections
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}

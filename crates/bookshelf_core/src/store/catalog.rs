//! Book catalog store.
//!
//! # Responsibility
//! - Hold the ordered sequence of book records for one process.
//! - Answer id and category lookups by linear scan.
//!
//! # Invariants
//! - `append` never reorders existing records.
//! - `find_by_id` returns the first record with a matching id.
//! - Category matching is exact and case-sensitive.

use crate::model::book::{seed_books, Book, BookId};

/// Store interface for catalog reads and appends.
pub trait CatalogStore {
    /// Returns every record in insertion order.
    fn list(&self) -> &[Book];

    /// Adds a record at the end.
    ///
    /// The caller supplies the id; no uniqueness check is performed.
    fn append(&mut self, book: Book);

    fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.list().iter().find(|book| book.id == id)
    }

    fn find_by_category(&self, category: &str) -> Vec<&Book> {
        self.list()
            .iter()
            .filter(|book| book.category == category)
            .collect()
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Process-memory catalog. Discarded when its owner is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryCatalog {
    books: Vec<Book>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the start-up seed records.
    pub fn seeded() -> Self {
        Self::from_books(seed_books())
    }

    /// Creates a catalog from records in the given order.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl CatalogStore for InMemoryCatalog {
    fn list(&self) -> &[Book] {
        &self.books
    }

    fn append(&mut self, book: Book) {
        self.books.push(book);
    }
}

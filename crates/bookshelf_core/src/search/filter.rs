//! Case-insensitive title/author filter.
//!
//! # Invariants
//! - Output is a subset of the input, in input order.
//! - An empty query keeps every input record.

use crate::model::book::Book;
use crate::store::catalog::CatalogStore;

/// Returns `true` when `book` matches `query` by title or author.
///
/// Matching is a case-insensitive substring test.
pub fn matches_query(book: &Book, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    book.title.to_lowercase().contains(&needle) || book.author.to_lowercase().contains(&needle)
}

/// Keeps records whose title or author contains `query`.
pub fn filter_books<'a, I>(books: I, query: &str) -> Vec<&'a Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    books
        .into_iter()
        .filter(|book| matches_query(book, query))
        .collect()
}

/// Category listing narrowed by the browse query.
pub fn browse<'a, S>(store: &'a S, category: &str, query: &str) -> Vec<&'a Book>
where
    S: CatalogStore + ?Sized,
{
    filter_books(store.find_by_category(category), query)
}

//! Book detail page.

use crate::model::book::Book;
use crate::route::path::DetailTarget;
use crate::store::catalog::CatalogStore;
use std::fmt::{Display, Formatter};

/// Fallback text for missing or malformed ids.
pub const BOOK_NOT_FOUND: &str = "Book not found";

/// Label of the history-back action.
pub const BACK_LABEL: &str = "Back to Browse";

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Found(Book),
    Missing,
}

impl DetailView {
    /// Looks up the routed record; malformed ids take the missing branch.
    pub fn build<S: CatalogStore + ?Sized>(store: &S, target: &DetailTarget) -> Self {
        target
            .id()
            .and_then(|id| store.find_by_id(id))
            .map_or(Self::Missing, |book| Self::Found(book.clone()))
    }

    pub fn book(&self) -> Option<&Book> {
        match self {
            Self::Found(book) => Some(book),
            Self::Missing => None,
        }
    }
}

impl Display for DetailView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => writeln!(f, "{BOOK_NOT_FOUND}"),
            Self::Found(book) => {
                writeln!(f, "{}", book.title)?;
                writeln!(f, "Author: {}", book.author)?;
                writeln!(f, "Category: {}", book.category)?;
                writeln!(f, "Description: {}", book.description)?;
                writeln!(f, "Rating: {}", book.rating)?;
                writeln!(f, "[{BACK_LABEL}]")
            }
        }
    }
}

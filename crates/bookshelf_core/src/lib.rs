//! Core domain logic for the Bookshelf catalog.
//! Store, routing, views and the creation form live here; frontends only
//! forward user events and print rendered screens.

pub mod app;
pub mod form;
pub mod logging;
pub mod model;
pub mod route;
pub mod search;
pub mod store;
pub mod view;

pub use app::{Library, ShellError};
pub use form::draft::{
    BookDraft, BookField, FormError, UnknownFieldError, MISSING_FIELDS_NOTICE,
};
pub use form::id::{IdGenerator, TimestampIdGenerator};
pub use form::rating::parse_rating;
pub use logging::{default_log_level, init_logging};
pub use model::book::{seed_books, Book, BookId, HOME_CATEGORIES};
pub use route::history::Navigator;
pub use route::path::{DetailTarget, Route};
pub use search::filter::{browse, filter_books, matches_query};
pub use store::catalog::{CatalogStore, InMemoryCatalog};
pub use view::{Link, Screen};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

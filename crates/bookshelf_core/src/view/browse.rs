//! Category browse page with a type-as-you-search filter.

use crate::route::path::Route;
use crate::search::filter::browse;
use crate::store::catalog::CatalogStore;
use crate::view::{write_link_list, Link};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView {
    pub category: String,
    /// Current search input text.
    pub query: String,
    /// Matching records as detail links, in store order.
    pub results: Vec<Link>,
    pub home: Link,
}

impl BrowseView {
    pub fn build<S: CatalogStore + ?Sized>(store: &S, category: &str, query: &str) -> Self {
        let results = browse(store, category, query)
            .into_iter()
            .map(|book| Link::new(book.title.clone(), Route::detail(book.id)))
            .collect();
        Self {
            category: category.to_string(),
            query: query.to_string(),
            results,
            home: Link::new("Back to Home", Route::Home),
        }
    }
}

impl Display for BrowseView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Books in {}", self.category)?;
        writeln!(f, "Search by title or author: [{}]", self.query)?;
        write_link_list(f, &self.results)?;
        writeln!(f, "{}", self.home)
    }
}

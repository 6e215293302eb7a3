//! Home page: category links and the first records of the catalog.

use crate::model::book::HOME_CATEGORIES;
use crate::route::path::Route;
use crate::store::catalog::CatalogStore;
use crate::view::{write_link_list, Link};
use std::fmt::{Display, Formatter};

/// Number of records listed under "Popular Books".
pub const POPULAR_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub categories: Vec<Link>,
    pub popular: Vec<Link>,
}

impl HomeView {
    pub fn build<S: CatalogStore + ?Sized>(store: &S) -> Self {
        let categories = HOME_CATEGORIES
            .iter()
            .map(|category| Link::new(*category, Route::browse(*category)))
            .collect();
        let popular = store
            .list()
            .iter()
            .take(POPULAR_LIMIT)
            .map(|book| Link::new(book.title.clone(), Route::detail(book.id)))
            .collect();
        Self {
            categories,
            popular,
        }
    }
}

impl Display for HomeView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Welcome to the Online Library")?;
        writeln!(f, "Book Categories")?;
        write_link_list(f, &self.categories)?;
        writeln!(f, "Popular Books")?;
        write_link_list(f, &self.popular)
    }
}

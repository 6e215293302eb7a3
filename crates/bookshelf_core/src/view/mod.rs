//! Screen view models and their text rendering.
//!
//! # Responsibility
//! - Build one view model per route from the catalog store.
//! - Render view models as plain text for terminal frontends.
//!
//! # Invariants
//! - Views only read the store; writes go through the creation form.
//! - Every link carries a typed route, never a hand-built path string.

use crate::route::path::Route;
use std::fmt::{Display, Formatter};

pub mod add_book;
pub mod browse;
pub mod detail;
pub mod home;
pub mod not_found;

pub use add_book::AddBookView;
pub use browse::BrowseView;
pub use detail::DetailView;
pub use home::HomeView;
pub use not_found::NotFoundView;

/// Navigation link to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub to: Route,
}

impl Link {
    pub fn new(label: impl Into<String>, to: Route) -> Self {
        Self {
            label: label.into(),
            to,
        }
    }
}

impl Display for Link {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.label, self.to.path())
    }
}

/// Links shown above every screen.
pub fn nav_links() -> [Link; 2] {
    [
        Link::new("Home", Route::Home),
        Link::new("Add Book", Route::AddBook),
    ]
}

/// Rendered content of the active route.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home(HomeView),
    Browse(BrowseView),
    Detail(DetailView),
    AddBook(AddBookView),
    NotFound(NotFoundView),
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [home, add] = nav_links();
        writeln!(f, "{home} | {add}")?;
        writeln!(f)?;
        match self {
            Self::Home(view) => write!(f, "{view}"),
            Self::Browse(view) => write!(f, "{view}"),
            Self::Detail(view) => write!(f, "{view}"),
            Self::AddBook(view) => write!(f, "{view}"),
            Self::NotFound(view) => write!(f, "{view}"),
        }
    }
}

fn write_link_list(f: &mut Formatter<'_>, links: &[Link]) -> std::fmt::Result {
    for link in links {
        writeln!(f, "  - {link}")?;
    }
    Ok(())
}

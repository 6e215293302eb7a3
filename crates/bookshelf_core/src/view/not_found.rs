//! Catch-all page for unmatched paths.

use crate::route::path::Route;
use crate::view::Link;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    /// Requested path that matched no route.
    pub path: String,
    pub home: Link,
}

impl NotFoundView {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            home: Link::new("Go Home", Route::Home),
        }
    }
}

impl Display for NotFoundView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "404 - Page Not Found. {}", self.home)
    }
}

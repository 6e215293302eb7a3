//! Navigation history stack.
//!
//! # Invariants
//! - The stack is never empty; the first entry is the start route.
//! - `back` on the first entry leaves the current route unchanged.

use crate::route::path::Route;
use log::debug;

/// Ordered list of visited routes, newest last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    entries: Vec<Route>,
}

impl Navigator {
    /// Starts history at `initial`.
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    /// Resolves `path` and pushes the resulting route.
    pub fn navigate(&mut self, path: &str) -> &Route {
        self.push(Route::parse(path))
    }

    /// Pushes an already typed route.
    pub fn push(&mut self, route: Route) -> &Route {
        debug!("event=navigate module=route status=ok to={route}");
        self.entries.push(route);
        self.current()
    }

    /// Returns to the immediately preceding route.
    ///
    /// Returns `false` when there is no earlier entry.
    pub fn back(&mut self) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        self.entries.pop();
        debug!(
            "event=navigate_back module=route status=ok to={}",
            self.current()
        );
        true
    }

    pub fn current(&self) -> &Route {
        // `entries` always holds the start route.
        &self.entries[self.entries.len() - 1]
    }

    /// Number of entries, including the start route.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

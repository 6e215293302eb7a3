//! Application shell owning catalog state and navigation.
//!
//! # Responsibility
//! - Own the store, the navigation history and per-page local state.
//! - Dispatch user events (navigation, typing, submission) synchronously.
//! - Render the active route as a [`Screen`].
//!
//! # Invariants
//! - Page-local state (browse query, form draft) resets whenever the active
//!   route changes, including history back.
//! - Navigating to the active route is a no-op.
//! - A successful submission appends one record and navigates to `Home`.
//! - A rejected submission keeps the draft and raises one blocking notice.

use crate::form::draft::{BookDraft, BookField, FormError};
use crate::form::id::{IdGenerator, TimestampIdGenerator};
use crate::model::book::BookId;
use crate::route::history::Navigator;
use crate::route::path::Route;
use crate::store::catalog::{CatalogStore, InMemoryCatalog};
use crate::view::{AddBookView, BrowseView, DetailView, HomeView, NotFoundView, Screen};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for events that do not apply to the active page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Search input only exists on a browse page.
    NoSearchInput(Route),
    /// Form input only exists on the add-book page.
    NoForm(Route),
    Form(FormError),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSearchInput(route) => write!(f, "no search input on `{route}`"),
            Self::NoForm(route) => write!(f, "no book form on `{route}`"),
            Self::Form(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormError> for ShellError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

/// One running catalog application.
///
/// The store is owned here and lent to each view while it renders.
pub struct Library<S: CatalogStore = InMemoryCatalog, G: IdGenerator = TimestampIdGenerator> {
    store: S,
    ids: G,
    navigator: Navigator,
    search: String,
    draft: BookDraft,
    notice: Option<String>,
}

impl Library {
    /// Starts at `Home` with the seeded in-memory catalog.
    pub fn seeded() -> Self {
        Self::new(InMemoryCatalog::seeded(), TimestampIdGenerator::new())
    }
}

impl<S: CatalogStore, G: IdGenerator> Library<S, G> {
    pub fn new(store: S, ids: G) -> Self {
        Self::with_start(store, ids, Route::Home)
    }

    /// Starts history at an arbitrary route.
    pub fn with_start(store: S, ids: G, start: Route) -> Self {
        Self {
            store,
            ids,
            navigator: Navigator::new(start),
            search: String::new(),
            draft: BookDraft::new(),
            notice: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Current browse search text; empty outside browse pages.
    pub fn search_query(&self) -> &str {
        &self.search
    }

    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    /// Follows a link or typed path.
    ///
    /// Following a link to the active route keeps its history entry and
    /// page-local state.
    pub fn open(&mut self, path: &str) -> &Route {
        self.go(Route::parse(path))
    }

    /// Follows a typed route. See [`Library::open`].
    pub fn go(&mut self, route: Route) -> &Route {
        if *self.navigator.current() != route {
            self.navigator.push(route);
            self.reset_page_state();
        }
        self.navigator.current()
    }

    /// History back. Returns `false` when already at the first entry.
    pub fn back(&mut self) -> bool {
        let moved = self.navigator.back();
        if moved {
            self.reset_page_state();
        }
        moved
    }

    /// Replaces the browse search text; results recompute on next render.
    ///
    /// # Errors
    /// - `ShellError::NoSearchInput` when the active page is not a browse page.
    pub fn search(&mut self, text: impl Into<String>) -> Result<(), ShellError> {
        if !matches!(self.route(), Route::Browse { .. }) {
            return Err(ShellError::NoSearchInput(self.route().clone()));
        }
        self.search = text.into();
        Ok(())
    }

    /// Replaces one form field with its full current text.
    ///
    /// # Errors
    /// - `ShellError::NoForm` when the active page is not the add-book page.
    pub fn set_field(
        &mut self,
        field: BookField,
        value: impl Into<String>,
    ) -> Result<(), ShellError> {
        self.require_form()?;
        self.draft.set(field, value);
        Ok(())
    }

    /// Submits the creation form.
    ///
    /// On success the new id is returned and the shell is on `Home`.
    ///
    /// # Errors
    /// - `ShellError::NoForm` when the active page is not the add-book page.
    /// - `ShellError::Form` when a field is empty; a blocking notice is raised
    ///   and the store is unchanged.
    pub fn submit(&mut self) -> Result<BookId, ShellError> {
        self.require_form()?;
        match self.draft.submit(&mut self.store, &mut self.ids) {
            Ok(id) => {
                self.go(Route::Home);
                Ok(id)
            }
            Err(err) => {
                self.notice = Some(err.to_string());
                Err(ShellError::Form(err))
            }
        }
    }

    /// Pending blocking notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Acknowledges and clears the pending notice.
    pub fn dismiss_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Renders the active route against the current store.
    pub fn render(&self) -> Screen {
        match self.route() {
            Route::Home => Screen::Home(HomeView::build(&self.store)),
            Route::Browse { category } => {
                Screen::Browse(BrowseView::build(&self.store, category, &self.search))
            }
            Route::Detail(target) => Screen::Detail(DetailView::build(&self.store, target)),
            Route::AddBook => Screen::AddBook(AddBookView::build(&self.draft)),
            Route::NotFound { path } => Screen::NotFound(NotFoundView::new(path.clone())),
        }
    }

    fn require_form(&self) -> Result<(), ShellError> {
        if *self.route() != Route::AddBook {
            return Err(ShellError::NoForm(self.route().clone()));
        }
        Ok(())
    }

    fn reset_page_state(&mut self) {
        self.search.clear();
        self.draft = BookDraft::new();
        self.notice = None;
    }
}

//! Route table and path parsing.
//!
//! # Responsibility
//! - Parse `/`, `/books/{category}`, `/book/{id}` and `/add-book`.
//! - Render typed routes back to canonical link paths.
//!
//! # Invariants
//! - Static segments match case-insensitively; parameters keep their case.
//! - One trailing slash is tolerated.
//! - Malformed detail ids become `DetailTarget::Invalid`, not a fallback id.
//! - Parameters are percent-decoded on parse and percent-encoded by `path`,
//!   so `Route::parse(&route.path()) == route` for every matched route.

use crate::model::book::BookId;
use once_cell::sync::Lazy;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;
use std::fmt::{Display, Formatter};

static HOME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/?$").expect("valid home regex"));
static BROWSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(?i:books)/([^/]+)/?$").expect("valid browse regex"));
static DETAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(?i:book)/([^/]+)/?$").expect("valid detail regex"));
static ADD_BOOK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(?i:add-book)/?$").expect("valid add-book regex"));

/// Characters escaped inside one path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Detail route parameter after integer parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailTarget {
    Id(BookId),
    /// Raw segment that is not a base-10 integer.
    Invalid(String),
}

impl DetailTarget {
    /// Parses one path segment into a detail target.
    pub fn parse(segment: &str) -> Self {
        match segment.parse::<BookId>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Invalid(segment.to_string()),
        }
    }

    pub fn id(&self) -> Option<BookId> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Invalid(_) => None,
        }
    }
}

/// Typed route state driving the active view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Browse { category: String },
    Detail(DetailTarget),
    AddBook,
    /// Fallback for any path matching none of the above.
    NotFound { path: String },
}

impl Route {
    /// Resolves a requested path to its route state.
    ///
    /// Query strings and fragments are ignored for matching.
    pub fn parse(path: &str) -> Self {
        let trimmed = strip_query_and_fragment(path.trim());
        let normalized = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        if HOME_RE.is_match(&normalized) {
            return Self::Home;
        }
        if ADD_BOOK_RE.is_match(&normalized) {
            return Self::AddBook;
        }
        if let Some(caps) = BROWSE_RE.captures(&normalized) {
            return Self::Browse {
                category: decode_segment(&caps[1]),
            };
        }
        if let Some(caps) = DETAIL_RE.captures(&normalized) {
            return Self::Detail(DetailTarget::parse(&decode_segment(&caps[1])));
        }

        Self::NotFound { path: normalized }
    }

    /// Builds the browse route for one category.
    pub fn browse(category: impl Into<String>) -> Self {
        Self::Browse {
            category: category.into(),
        }
    }

    /// Builds the detail route for one record id.
    pub fn detail(id: BookId) -> Self {
        Self::Detail(DetailTarget::Id(id))
    }

    /// Canonical path used for links to this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Browse { category } => format!("/books/{}", encode_segment(category)),
            Self::Detail(DetailTarget::Id(id)) => format!("/book/{id}"),
            Self::Detail(DetailTarget::Invalid(raw)) => format!("/book/{}", encode_segment(raw)),
            Self::AddBook => "/add-book".to_string(),
            Self::NotFound { path } => path.clone(),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Invalid UTF-8 after decoding is replaced, not rejected.
fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(index) => &path[..index],
        None => path,
    }
}

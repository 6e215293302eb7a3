//! Creation form draft and submission.
//!
//! # Invariants
//! - Presence is the only check: a field is missing when it is the empty string.
//! - Submission appends exactly one record or none.

use crate::form::id::IdGenerator;
use crate::form::rating::parse_rating;
use crate::model::book::{Book, BookId};
use crate::store::catalog::CatalogStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Blocking notice shown when any field is empty.
pub const MISSING_FIELDS_NOTICE: &str = "Please fill all fields";

/// One input of the creation form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Author,
    Category,
    Description,
    Rating,
}

impl BookField {
    pub const ALL: [BookField; 5] = [
        BookField::Title,
        BookField::Author,
        BookField::Category,
        BookField::Description,
        BookField::Rating,
    ];

    /// Lowercase field name used by text frontends.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Category => "category",
            Self::Description => "description",
            Self::Rating => "rating",
        }
    }

    /// Input placeholder label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Category => "Category",
            Self::Description => "Description",
            Self::Rating => "Rating",
        }
    }
}

impl Display for BookField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown field name passed to [`BookField::from_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError(pub String);

impl Display for UnknownFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown form field `{}`; expected title|author|category|description|rating",
            self.0
        )
    }
}

impl Error for UnknownFieldError {}

impl FromStr for BookField {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| UnknownFieldError(value.trim().to_string()))
    }
}

/// Form submission error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more fields were left empty; listed in display order.
    MissingFields(Vec<BookField>),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(_) => f.write_str(MISSING_FIELDS_NOTICE),
        }
    }
}

impl Error for FormError {}

/// Local draft state of the creation form. All fields start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    /// Raw text; parsed only on submission.
    pub rating: String,
}

impl BookDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Category => &self.category,
            BookField::Description => &self.description,
            BookField::Rating => &self.rating,
        }
    }

    /// Replaces one field with the input's full current text.
    pub fn set(&mut self, field: BookField, value: impl Into<String>) {
        let slot = match field {
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Category => &mut self.category,
            BookField::Description => &mut self.description,
            BookField::Rating => &mut self.rating,
        };
        *slot = value.into();
    }

    /// Fields that are still the empty string.
    pub fn missing_fields(&self) -> Vec<BookField> {
        BookField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Builds a record from a complete draft.
    ///
    /// # Errors
    /// - `FormError::MissingFields` when any field is empty.
    pub fn to_book(&self, id: BookId) -> Result<Book, FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        Ok(Book::new(
            id,
            self.title.clone(),
            self.author.clone(),
            self.category.clone(),
            self.description.clone(),
            parse_rating(&self.rating),
        ))
    }

    /// Validates, builds and appends a new record.
    ///
    /// The id is drawn from `ids` only after presence validation passes.
    ///
    /// # Errors
    /// - `FormError::MissingFields` when any field is empty; `store` is untouched.
    pub fn submit<S, G>(&self, store: &mut S, ids: &mut G) -> Result<BookId, FormError>
    where
        S: CatalogStore + ?Sized,
        G: IdGenerator + ?Sized,
    {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            let names = missing
                .iter()
                .map(|field| field.name())
                .collect::<Vec<_>>()
                .join(",");
            warn!("event=book_submit module=form status=rejected missing={names}");
            return Err(FormError::MissingFields(missing));
        }

        let book = self.to_book(ids.next_id())?;
        let id = book.id;
        store.append(book);
        info!(
            "event=book_submit module=form status=ok id={id} store_len={}",
            store.len()
        );
        Ok(id)
    }
}

//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical catalog record.
//! - Provide the start-up seed records.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused by another record.
//! - `category` is free text; the home page labels are not enforced.

use serde::{Deserialize, Deserializer, Serialize};

/// Integer identifier of a catalog record.
///
/// Generated ids are epoch milliseconds, seeds use small integers.
pub type BookId = i64;

/// Category labels linked from the home page, in display order.
pub const HOME_CATEGORIES: [&str; 4] = ["Fiction", "Non-Fiction", "Sci-Fi", "Biography"];

/// Canonical catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Compared exactly (case-sensitive) by category browsing.
    pub category: String,
    pub description: String,
    /// May be `NaN` when the form rating had no numeric prefix.
    ///
    /// JSON writes non-finite ratings as `null`, which reads back as `NaN`.
    #[serde(deserialize_with = "deserialize_rating")]
    pub rating: f64,
}

impl Book {
    /// Creates a record with a caller-provided id.
    ///
    /// No uniqueness or range checks happen here; see the store contract.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            category: category.into(),
            description: description.into(),
            rating,
        }
    }
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Returns the two records present at process start, in store order.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(
            1,
            "Dune",
            "Frank Herbert",
            "Sci-Fi",
            "A science fiction novel",
            4.8,
        ),
        Book::new(
            2,
            "The Hobbit",
            "J.R.R. Tolkien",
            "Fiction",
            "A fantasy novel",
            4.9,
        ),
    ]
}

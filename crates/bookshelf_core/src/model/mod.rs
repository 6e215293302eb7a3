//! Catalog domain model.
//!
//! # Responsibility
//! - Define the book record shared by the store, views and form.
//! - Own the seed data and the fixed category labels shown on the home page.
//!
//! # Invariants
//! - A `BookId` is unique within one store for lookups to be unambiguous.
//! - Records are never mutated after they enter the store.

pub mod book;

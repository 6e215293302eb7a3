//! Catalog store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the read/append contract consumed by views and the form.
//! - Keep record storage details out of the application shell.
//!
//! # Invariants
//! - Records are returned in insertion order.
//! - The store never removes or mutates a record.

pub mod catalog;

//! Book creation form.
//!
//! # Responsibility
//! - Hold the five-field draft for a new record.
//! - Validate presence, build the record and append it to the store.
//!
//! # Invariants
//! - A rejected submission never touches the store.
//! - Generated ids are strictly increasing within one generator.

pub mod draft;
pub mod id;
pub mod rating;

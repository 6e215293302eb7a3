//! Path routing and navigation history.
//!
//! # Responsibility
//! - Map request paths to typed route states.
//! - Track visited routes so "back" returns to the previous state.
//!
//! # Invariants
//! - Route matching is a pure function of the path.
//! - Any unmatched path resolves to `Route::NotFound`, never an error.

pub mod history;
pub mod path;

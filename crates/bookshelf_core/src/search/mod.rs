//! Browse-page text filtering.
//!
//! # Responsibility
//! - Narrow a category listing by a free-text title/author query.
//! - Keep matching rules inside core so every frontend filters alike.

pub mod filter;

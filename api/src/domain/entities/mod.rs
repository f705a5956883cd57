//! Domain entities
//!
//! Pure domain models representing the catalog.

pub mod book;

pub use book::{Book, BookId, NewBook};

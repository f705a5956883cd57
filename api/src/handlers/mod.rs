//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod books;

pub use books::{books_by_author, create_book, delete_book, get_book, list_books, search_books};

//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::app::sample_catalog;
use crate::domain::entities::{Book, BookId, NewBook};

/// The two-author book used throughout the controller tests
pub fn fundamentals_book() -> Book {
    NewBook::new(
        "Fundamentals of Software Engineering",
        ["Nathaniel Schutta", "Dan Vega"],
        "978-1098143237",
        2025,
    )
    .into_book(BookId(1))
}

/// Create a stored book with a specific id and title
pub fn test_book(id: i64, title: &str) -> Book {
    test_book_by(id, title, "Test Author")
}

/// Create a stored single-author book
pub fn test_book_by(id: i64, title: &str, author: &str) -> Book {
    NewBook::with_author(title, author, format!("isbn-{}", id), 2020).into_book(BookId(id))
}

/// Create a valid unsaved book with the given title
pub fn test_new_book(title: &str) -> NewBook {
    NewBook::with_author(title, "Test Author", "978-0000000000", 2020)
}

/// The sample catalog: Fundamentals, Effective Java, two Robert Martin
/// books and Domain-Driven Design
pub fn sample_books() -> Vec<NewBook> {
    sample_catalog()
}

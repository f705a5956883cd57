//! Repository port traits
//!
//! These traits define the interface for catalog storage.
//! Implementations are provided by adapters (e.g., the in-memory store).

use crate::domain::entities::{Book, BookId, NewBook};
use crate::error::DomainError;

/// Repository for Book entities
///
/// All operations are synchronous and never report absence as an error.
#[cfg_attr(test, mockall::automock)]
pub trait BookRepository: Send + Sync {
    /// Store a new book, assigning an id when none was supplied
    fn create(&self, book: NewBook) -> Result<Book, DomainError>;

    /// All books in insertion order
    fn find_all(&self) -> Vec<Book>;

    /// Find a book by ID
    fn find_by_id(&self, id: BookId) -> Option<Book>;

    /// Check whether a book is currently stored
    fn exists_by_id(&self, id: BookId) -> bool;

    /// Remove a book; returns false if it was not present
    fn delete_by_id(&self, id: BookId) -> bool;

    /// Books whose title contains `fragment`, ignoring case
    fn find_by_title_containing_ignore_case(&self, fragment: &str) -> Vec<Book>;

    /// Books where any author contains `fragment`, ignoring case
    fn find_by_author_containing_ignore_case(&self, fragment: &str) -> Vec<Book>;
}

//! Book service
//!
//! Use cases behind the `/api/books` endpoints. Turns store absence signals
//! (`None` / `false`) into `NotFound` errors for the HTTP layer.

use std::sync::Arc;

use crate::domain::entities::{Book, BookId, NewBook};
use crate::domain::ports::BookRepository;
use crate::error::AppError;

/// Service for managing the catalog
pub struct BookService {
    books: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.books.find_all()
    }

    pub fn get_book(&self, id: BookId) -> Result<Book, AppError> {
        self.books
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub fn search_by_title(&self, fragment: &str) -> Vec<Book> {
        self.books.find_by_title_containing_ignore_case(fragment)
    }

    pub fn search_by_author(&self, fragment: &str) -> Vec<Book> {
        self.books.find_by_author_containing_ignore_case(fragment)
    }

    pub fn create_book(&self, book: NewBook) -> Result<Book, AppError> {
        let created = self.books.create(book)?;
        tracing::info!(book_id = %created.id, title = %created.title, "Book created");
        Ok(created)
    }

    /// Delete a book, reporting `NotFound` if it is not stored
    pub fn delete_book(&self, id: BookId) -> Result<(), AppError> {
        if !self.books.exists_by_id(id) {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        // A concurrent delete can win between the two calls
        if !self.books.delete_by_id(id) {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }

    /// Load the sample catalog. Returns the number of books added.
    pub fn seed_sample_books(&self) -> Result<usize, AppError> {
        let samples = sample_catalog();
        let count = samples.len();
        for book in samples {
            self.books.create(book)?;
        }
        tracing::info!("Seeded {} sample books", count);
        Ok(count)
    }
}

/// Books loaded when `SEED_SAMPLE_BOOKS` is enabled
pub fn sample_catalog() -> Vec<NewBook> {
    vec![
        NewBook::new(
            "Fundamentals of Software Engineering",
            ["Nathaniel Schutta", "Dan Vega"],
            "978-1098143237",
            2025,
        ),
        NewBook::with_author("Effective Java", "Joshua Bloch", "978-0134685991", 2018),
        NewBook::with_author("Clean Code", "Robert Martin", "978-0132350884", 2008),
        NewBook::with_author("Clean Architecture", "Robert Martin", "978-0134494166", 2017),
        NewBook::with_author("Domain-Driven Design", "Eric Evans", "978-0321125217", 2003),
    ]
}

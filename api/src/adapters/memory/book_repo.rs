//! In-memory adapter for BookRepository

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{Book, BookId, NewBook};
use crate::domain::ports::BookRepository;
use crate::error::DomainError;

#[derive(Default)]
struct Shelf {
    books: HashMap<BookId, Book>,
    /// Insertion order of the ids in `books`
    order: Vec<BookId>,
}

impl Shelf {
    fn iter(&self) -> impl Iterator<Item = &Book> {
        self.order.iter().filter_map(|id| self.books.get(id))
    }
}

/// Thread-safe in-memory implementation of BookRepository
///
/// Reads share the lock; `create` and `delete_by_id` apply under the write
/// lock so readers never observe a half-applied change.
pub struct InMemoryBookRepository {
    shelf: RwLock<Shelf>,
    /// Highest id handed out or accepted so far
    last_id: AtomicI64,
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            shelf: RwLock::new(Shelf::default()),
            last_id: AtomicI64::new(0),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Shelf> {
        self.shelf.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shelf> {
        self.shelf.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn search(&self, fragment: &str, predicate: impl Fn(&Book, &str) -> bool) -> Vec<Book> {
        let needle = fragment.to_lowercase();
        self.read()
            .iter()
            .filter(|book| predicate(*book, needle.as_str()))
            .cloned()
            .collect()
    }
}

fn validate(book: &NewBook) -> Result<(), DomainError> {
    if book.title.trim().is_empty() {
        return Err(DomainError::Validation("title must not be empty".to_string()));
    }
    if book.authors.is_empty() {
        return Err(DomainError::Validation(
            "authors must contain at least one name".to_string(),
        ));
    }
    if book.authors.iter().any(|a| a.trim().is_empty()) {
        return Err(DomainError::Validation(
            "author names must not be empty".to_string(),
        ));
    }
    if let Some(id) = book.id {
        if !id.is_valid() {
            return Err(DomainError::Validation(format!(
                "id must be a positive integer, got {}",
                id
            )));
        }
    }
    Ok(())
}

impl BookRepository for InMemoryBookRepository {
    fn create(&self, book: NewBook) -> Result<Book, DomainError> {
        validate(&book)?;

        let mut shelf = self.write();

        let id = match book.id {
            Some(id) => {
                if shelf.books.contains_key(&id) {
                    return Err(DomainError::AlreadyExists(format!(
                        "Book {} already exists",
                        id
                    )));
                }
                self.last_id.fetch_max(id.0, Ordering::SeqCst);
                id
            }
            None => {
                let next = self
                    .last_id
                    .load(Ordering::SeqCst)
                    .checked_add(1)
                    .ok_or_else(|| {
                        DomainError::Internal("book id space exhausted".to_string())
                    })?;
                self.last_id.store(next, Ordering::SeqCst);
                BookId(next)
            }
        };

        let stored = book.into_book(id);
        shelf.order.push(id);
        shelf.books.insert(id, stored.clone());

        Ok(stored)
    }

    fn find_all(&self) -> Vec<Book> {
        self.read().iter().cloned().collect()
    }

    fn find_by_id(&self, id: BookId) -> Option<Book> {
        self.read().books.get(&id).cloned()
    }

    fn exists_by_id(&self, id: BookId) -> bool {
        self.read().books.contains_key(&id)
    }

    fn delete_by_id(&self, id: BookId) -> bool {
        let mut shelf = self.write();
        if shelf.books.remove(&id).is_none() {
            return false;
        }
        shelf.order.retain(|stored| *stored != id);
        true
    }

    fn find_by_title_containing_ignore_case(&self, fragment: &str) -> Vec<Book> {
        self.search(fragment, Book::has_title_containing)
    }

    fn find_by_author_containing_ignore_case(&self, fragment: &str) -> Vec<Book> {
        self.search(fragment, Book::has_author_containing)
    }
}

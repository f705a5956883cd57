//! In-memory adapters
//!
//! Process-lifetime storage; nothing survives a restart.

mod book_repo;

pub use book_repo::InMemoryBookRepository;

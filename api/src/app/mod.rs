//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod book_service;

pub use book_service::BookService;
#[cfg(test)]
pub use book_service::sample_catalog;

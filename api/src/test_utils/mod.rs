//! Test utilities
//!
//! Fixtures and HTTP helpers shared by unit tests.
//!
//! Repository doubles come from `mockall` (`MockBookRepository`, generated on
//! the port trait); full-stack tests use the real `InMemoryBookRepository`.

pub mod fixtures;
pub mod http;

pub use fixtures::*;
pub use http::*;

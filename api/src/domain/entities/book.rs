//! Book domain entity
//!
//! An immutable catalog record. Books are created once, read any number of
//! times and removed; there is no update path.

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl BookId {
    /// Ids handed out by the store are always positive
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// Author names in the order they were given
    #[serde(deserialize_with = "one_or_many")]
    pub authors: Vec<String>,
    pub isbn: String,
    pub published_year: i32,
}

impl Book {
    pub fn has_title_containing(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }

    pub fn has_author_containing(&self, needle_lower: &str) -> bool {
        self.authors
            .iter()
            .any(|a| a.to_lowercase().contains(needle_lower))
    }
}

/// Data needed to create a new book
///
/// `id` is normally left empty so the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub id: Option<BookId>,
    pub title: String,
    pub authors: Vec<String>,
    pub isbn: String,
    pub published_year: i32,
}

impl NewBook {
    pub fn new<A, S>(
        title: impl Into<String>,
        authors: A,
        isbn: impl Into<String>,
        published_year: i32,
    ) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            title: title.into(),
            authors: authors.into_iter().map(Into::into).collect(),
            isbn: isbn.into(),
            published_year,
        }
    }

    /// Single-author shorthand; the author becomes a one-element list
    pub fn with_author(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        published_year: i32,
    ) -> Self {
        Self::new(title, [author.into()], isbn, published_year)
    }

    /// Request a specific id instead of letting the store assign one
    #[cfg(test)]
    pub fn with_id(mut self, id: BookId) -> Self {
        self.id = Some(id);
        self
    }

    /// Turn into a stored record under the given id
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            authors: self.authors,
            isbn: self.isbn,
            published_year: self.published_year,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accepts either `"Eric Evans"` or `["Eric Evans"]`
pub fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(author) => vec![author],
        OneOrMany::Many(authors) => authors,
    })
}

//! Book handlers
//!
//! Endpoints for browsing, searching, adding and removing catalog entries.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::domain::entities::book::one_or_many;
use crate::domain::entities::{Book, BookId, NewBook};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for title search
#[derive(Debug, Deserialize)]
pub struct TitleSearchQuery {
    /// Missing means "match everything"
    #[serde(default)]
    pub title: String,
}

/// Request body for adding a book
///
/// Any `id` in the body is ignored; the store assigns one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub title: String,
    /// A list of names or a single name
    #[serde(deserialize_with = "one_or_many")]
    pub authors: Vec<String>,
    pub isbn: String,
    pub published_year: i32,
}

impl From<CreateBookRequest> for NewBook {
    fn from(request: CreateBookRequest) -> Self {
        NewBook::new(
            request.title,
            request.authors,
            request.isbn,
            request.published_year,
        )
    }
}

/// GET /api/books
///
/// List every book in insertion order.
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.book_service.list_books())
}

/// GET /api/books/:id
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, AppError> {
    let book = state.book_service.get_book(BookId(id))?;
    Ok(Json(book))
}

/// GET /api/books/search?title=
///
/// Case-insensitive substring search on titles.
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<TitleSearchQuery>,
) -> Json<Vec<Book>> {
    Json(state.book_service.search_by_title(&query.title))
}

/// GET /api/books/author/:author
///
/// Case-insensitive substring search across all authors of each book.
pub async fn books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Json<Vec<Book>> {
    Json(state.book_service.search_by_author(&author))
}

/// POST /api/books
///
/// Add a book. Malformed bodies are reported as 400 rather than axum's 422.
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let book = state.book_service.create_book(request.into())?;

    Ok((StatusCode::CREATED, Json(book)))
}

/// DELETE /api/books/:id
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.book_service.delete_book(BookId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

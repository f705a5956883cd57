//! Bookshelf API Server
//!
//! An in-memory book catalog exposed over HTTP.
//! Uses hexagonal (ports & adapters) architecture: handlers talk to the
//! `BookService`, which talks to a `BookRepository` port.

use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::InMemoryBookRepository;
use app::BookService;
use config::Config;
use domain::ports::BookRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self {
            book_service: Arc::new(BookService::new(books)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Assemble the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route("/api/books/search", get(handlers::search_books))
        .route("/api/books/author/:author", get(handlers::books_by_author))
        .route(
            "/api/books/:id",
            get(handlers::get_book).delete(handlers::delete_book),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bookshelf_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookshelf API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let book_repo = Arc::new(InMemoryBookRepository::new());

    // Create app state
    let state = AppState::new(book_repo);

    if config.seed_sample_books {
        state.book_service.seed_sample_books()?;
    }

    let app = build_router(state);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

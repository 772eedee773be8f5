//! Book collection handlers

use super::{commit, ApiError};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use biblio_core::{Book, NewBook};

/// List all books
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let catalog = state.catalog.read().await;
    Json(catalog.books())
}

/// Register a new book
pub async fn create_book(
    State(state): State<AppState>,
    Json(new): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = commit(&state, |catalog| catalog.add_book(new)).await?;

    tracing::info!("Registered book {} '{}'", book.id, book.title);
    Ok((StatusCode::CREATED, Json(book)))
}

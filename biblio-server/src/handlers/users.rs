//! User collection and loan handlers

use super::{commit, ApiError};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use biblio_core::{LoanRequest, NewUser, User};

/// List all users with their borrowed books
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let catalog = state.catalog.read().await;
    Json(catalog.users())
}

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(new): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = commit(&state, |catalog| catalog.add_user(new)).await?;

    tracing::info!("Registered user {} '{}'", user.id, user.name);
    Ok((StatusCode::CREATED, Json(user)))
}

/// Lend a book to a user
pub async fn borrow_book(
    State(state): State<AppState>,
    Json(request): Json<LoanRequest>,
) -> Result<StatusCode, ApiError> {
    commit(&state, |catalog| catalog.borrow(&request)).await?;

    tracing::info!("Lent {} to {}", request.book_id, request.user_id);
    Ok(StatusCode::OK)
}

/// Take a book back from a user
pub async fn return_book(
    State(state): State<AppState>,
    Json(request): Json<LoanRequest>,
) -> Result<StatusCode, ApiError> {
    commit(&state, |catalog| catalog.return_book(&request)).await?;

    tracing::info!("Returned {} from {}", request.book_id, request.user_id);
    Ok(StatusCode::OK)
}

//! Request handlers

mod books;
mod users;

pub use books::*;
pub use users::*;

use crate::state::AppState;
use axum::{http::StatusCode, Json};
use biblio_core::{Catalog, CatalogError};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Error response used by every handler
pub type ApiError = (StatusCode, String);

/// Map a catalog rule violation onto an HTTP status
pub fn catalog_error(err: CatalogError) -> ApiError {
    let status = match err {
        CatalogError::MissingField(_) => StatusCode::BAD_REQUEST,
        CatalogError::UnknownBook(_) | CatalogError::UnknownUser(_) => StatusCode::NOT_FOUND,
        CatalogError::BookUnavailable(_) | CatalogError::NotBorrowed { .. } => {
            StatusCode::CONFLICT
        }
    };
    (status, err.to_string())
}

/// Error for a failed save after a mutation
pub fn persistence_error(err: anyhow::Error) -> ApiError {
    tracing::error!("Failed to save library: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to save library".to_string(),
    )
}

/// Apply a mutation to a copy of the catalog, persist it, then publish it
///
/// A rejected or unsaved mutation leaves the shared catalog untouched.
pub async fn commit<T>(
    state: &AppState,
    mutate: impl FnOnce(&mut Catalog) -> Result<T, CatalogError>,
) -> Result<T, ApiError> {
    let mut catalog = state.catalog.write().await;
    let mut next = catalog.clone();
    let out = mutate(&mut next).map_err(catalog_error)?;
    state.save(&next).await.map_err(persistence_error)?;
    *catalog = next;
    Ok(out)
}

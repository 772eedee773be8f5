//! Biblio Server Library
//!
//! An in-memory reference collaborator serving the REST endpoints the Biblio
//! front end talks to. This module exports the server components for testing
//! and reuse.

pub mod handlers;
pub mod routes;
pub mod state;

use anyhow::Result;
use tokio::net::TcpListener;

/// Serve the API on an already bound listener until the task is dropped
pub async fn serve(listener: TcpListener, state: state::AppState) -> Result<()> {
    let app = routes::create_router(state);
    axum::serve(listener, app).await?;
    Ok(())
}

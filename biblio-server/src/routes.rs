//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Origins allowed when `BIBLIO_CORS_ORIGINS` is unset
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/Books", get(handlers::list_books).post(handlers::create_book))
        .route("/Users", get(handlers::list_users).post(handlers::create_user))
        .route("/Users/borrow", post(handlers::borrow_book))
        .route("/Users/return", post(handlers::return_book));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(std::env::var("BIBLIO_CORS_ORIGINS").ok().as_deref()))
        .with_state(state)
}

/// CORS from a `*` wildcard or a comma-separated origin list
fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let allow_origin = match origins {
        Some("*") => AllowOrigin::any(),
        Some(origins) => AllowOrigin::list(parse_origins(origins.split(','))),
        None => AllowOrigin::list(parse_origins(DEV_ORIGINS.into_iter())),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn parse_origins<'a>(origins: impl Iterator<Item = &'a str>) -> Vec<HeaderValue> {
    origins.filter_map(|s| s.trim().parse().ok()).collect()
}

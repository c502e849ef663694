//! HTTP routes for the web UI.

mod api;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use tower_http::{cors::CorsLayer, services::ServeDir};

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Determine static file directory
    let static_dir = std::env::var("PAPERQA_STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            manifest.join("static")
        });

    Router::new()
        // API routes
        .route("/api/papers", get(api::search_papers))
        .route("/api/stored", get(api::stored_papers))
        .route("/api/ask", post(api::ask))
        .route("/api/health", get(api::health))
        // Static files (serve index.html as fallback)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        // CORS for development
        .layer(CorsLayer::permissive())
        // State
        .with_state(state)
}

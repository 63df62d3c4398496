//! notefolio-server
//!
//! The HTTP process: document API, AI batch generation, preview and export
//! routes, and the credential-holding Gemini relay. The upstream API key
//! lives only in this process — the browser never sees it.

pub mod error;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router over shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/blocks", get(routes::blocks::list_blocks))
        .route("/blocks", post(routes::blocks::create_block))
        .route("/blocks/{id}", delete(routes::blocks::delete_block))
        .route("/settings", get(routes::settings::get_settings))
        .route("/settings", put(routes::settings::update_settings))
        .route("/generate", post(routes::generate::generate_blocks))
        .route("/preview", get(routes::preview::preview_surface))
        .route("/export", post(routes::export::export_document))
        .route("/api/gemini", post(routes::gemini::relay))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .with_state(state)
}

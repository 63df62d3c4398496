use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use notefolio_export::layout::lay_out;
use notefolio_export::render::render_surface;

use crate::error::ApiError;
use crate::state::AppState;

/// The current preview surface, rendered fresh on every request.
pub async fn preview_surface(State(state): State<AppState>) -> Result<Response, ApiError> {
    let blocks = state.document.lock().await.blocks().to_vec();
    let settings = state.settings.lock().await.clone();

    let surface = lay_out(&blocks, &settings);
    let svg = render_surface(&surface)?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

use axum::extract::State;
use axum::Json;

use notefolio_core::models::layout::LayoutSettings;

use crate::state::AppState;

pub async fn get_settings(State(state): State<AppState>) -> Json<LayoutSettings> {
    let settings = state.settings.lock().await;
    Json(settings.clone())
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(new_settings): Json<LayoutSettings>,
) -> Json<LayoutSettings> {
    let mut settings = state.settings.lock().await;
    *settings = new_settings;
    Json(settings.clone())
}

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use notefolio_core::models::block::ContentBlock;
use notefolio_gemini::client::GeminiClient;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GenerateTopicsRequest {
    /// Free text, one topic per line; blank lines are ignored.
    pub topics: String,
}

/// Run the AI batch flow and append the resulting blocks.
///
/// Nothing is appended unless the whole upstream round trip succeeds, so a
/// failed call leaves the document untouched.
pub async fn generate_blocks(
    State(state): State<AppState>,
    Json(req): Json<GenerateTopicsRequest>,
) -> Result<Json<Vec<ContentBlock>>, ApiError> {
    let api_key = state
        .gemini_api_key
        .clone()
        .ok_or_else(|| ApiError::BadRequest("Gemini API key not set on server.".to_string()))?;

    let client = GeminiClient::with_endpoint(state.http.clone(), api_key, &state.gemini_endpoint);
    let blocks = client.generate_batch(&req.topics).await?;

    let mut document = state.document.lock().await;
    for block in &blocks {
        document.append(block.clone());
    }
    info!(
        generated = blocks.len(),
        blocks = document.len(),
        "AI batch appended"
    );

    Ok(Json(blocks))
}

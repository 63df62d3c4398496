use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use notefolio_core::models::block::ContentBlock;
use notefolio_core::models::image::validate_data_uri;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_blocks(State(state): State<AppState>) -> Json<Vec<ContentBlock>> {
    let document = state.document.lock().await;
    Json(document.blocks().to_vec())
}

#[derive(Deserialize)]
pub struct CreateBlockRequest {
    pub topic: String,
    pub notes: String,
    /// Data URIs, validated per-file below.
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Serialize)]
pub struct RejectedImage {
    pub index: usize,
    pub reason: String,
}

#[derive(Serialize)]
pub struct CreateBlockResponse {
    pub block: ContentBlock,
    /// Images that failed validation. Rejections are per-file and do not
    /// abort the rest of the batch or the block itself.
    pub rejected_images: Vec<RejectedImage>,
}

pub async fn create_block(
    State(state): State<AppState>,
    Json(req): Json<CreateBlockRequest>,
) -> Result<Json<CreateBlockResponse>, ApiError> {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for (index, uri) in req.images.iter().enumerate() {
        match validate_data_uri(uri) {
            Ok(image) => accepted.push(image),
            Err(e) => rejected.push(RejectedImage {
                index,
                reason: e.to_string(),
            }),
        }
    }

    let block = ContentBlock::new(req.topic, req.notes, accepted)?;

    let mut document = state.document.lock().await;
    document.append(block.clone());
    info!(id = %block.id, blocks = document.len(), "content block appended");

    Ok(Json(CreateBlockResponse {
        block,
        rejected_images: rejected,
    }))
}

#[derive(Serialize)]
pub struct DeleteBlockResponse {
    pub removed: bool,
}

pub async fn delete_block(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<DeleteBlockResponse> {
    let mut document = state.document.lock().await;
    let removed = document.remove(id);
    if removed {
        info!(%id, blocks = document.len(), "content block removed");
    }
    Json(DeleteBlockResponse { removed })
}

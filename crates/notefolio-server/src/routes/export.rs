use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::info;

use notefolio_export::{export_pdf, OUTPUT_FILENAME};

use crate::error::ApiError;
use crate::state::AppState;

/// Export the current document as a multi-page PDF.
///
/// The document is delivered under the fixed filename; a failed export
/// produces an error body and no bytes.
pub async fn export_document(State(state): State<AppState>) -> Result<Response, ApiError> {
    let blocks = state.document.lock().await.blocks().to_vec();
    let settings = state.settings.lock().await.clone();

    let export = export_pdf(&blocks, &settings)?;
    info!(pages = export.page_count, "PDF export delivered");

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{OUTPUT_FILENAME}\""),
        ),
    ];
    Ok((headers, export.bytes).into_response())
}

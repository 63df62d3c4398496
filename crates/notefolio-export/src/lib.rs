//! notefolio-export
//!
//! Preview surface rendering and PDF export. The pipeline projects the
//! document into a two-column A4 SVG surface, rasterizes it at a fixed
//! oversampling factor, slices the raster strip into page-height viewports,
//! and assembles the slices into a multi-page PDF.

pub mod error;
pub mod layout;
pub mod paginate;
pub mod pdf;
pub mod raster;
pub mod render;
pub mod styles;

use tracing::info;

use notefolio_core::models::block::ContentBlock;
use notefolio_core::models::layout::LayoutSettings;

use crate::error::ExportError;
use crate::paginate::plan_pages;

/// Fixed name the assembled document is delivered under.
pub const OUTPUT_FILENAME: &str = "formatted-notes.pdf";

/// A finished export: the complete PDF, assembled in memory.
/// Nothing is written anywhere until these bytes exist in full.
#[derive(Debug, Clone)]
pub struct PdfExport {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Run the full export pipeline over the current document.
///
/// Fails up front on an empty document: the preview surface would render
/// no content, and no partial output may be produced.
pub fn export_pdf(
    blocks: &[ContentBlock],
    settings: &LayoutSettings,
) -> Result<PdfExport, ExportError> {
    if blocks.is_empty() {
        return Err(ExportError::EmptyDocument);
    }

    let surface = layout::lay_out(blocks, settings);
    let svg = render::render_surface(&surface)?;
    let pixmap = raster::rasterize(&svg)?;

    let strip_png = pixmap
        .encode_png()
        .map_err(|e| ExportError::Raster(format!("PNG encoding failed: {e}")))?;

    let plan = plan_pages(pixmap.height());
    let bytes = pdf::assemble_pdf(&strip_png, &plan)?;

    info!(
        blocks = blocks.len(),
        pages = plan.offsets.len(),
        strip_height = plan.strip_height,
        "assembled PDF export"
    );

    Ok(PdfExport {
        bytes,
        page_count: plan.offsets.len(),
    })
}

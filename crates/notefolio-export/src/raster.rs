use std::sync::Arc;

use tracing::warn;

use crate::error::ExportError;
use crate::styles::OVERSAMPLE;

/// Rasterize the surface SVG into a full-height strip at the fixed
/// oversampling factor.
///
/// Inline data-URI images decode synchronously during the render; an image
/// the decoder cannot handle leaves its region blank rather than failing
/// the export.
pub fn rasterize(svg: &str) -> Result<tiny_skia::Pixmap, ExportError> {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    if fontdb.is_empty() {
        warn!("no system fonts found, text rendering may be limited");
    }

    let options = usvg::Options {
        fontdb: Arc::new(fontdb),
        ..usvg::Options::default()
    };

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| ExportError::Raster(format!("SVG parsing failed: {e}")))?;

    let size = tree.size();
    let scale = OVERSAMPLE as f32;
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width.max(1), height.max(1)).ok_or_else(|| {
        ExportError::Raster(format!("failed to create pixmap ({width}x{height})"))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap)
}

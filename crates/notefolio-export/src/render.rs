use tera::{Context, Tera};

use crate::error::ExportError;
use crate::layout::Surface;

const SURFACE_TEMPLATE: &str = include_str!("templates/surface.svg.tera");

/// Render a positioned surface into its SVG document.
///
/// The template is the single source of the surface's markup; the layout
/// pass supplies every coordinate. Text content is escaped in the template.
pub fn render_surface(surface: &Surface) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("surface.svg", SURFACE_TEMPLATE)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let value = serde_json::to_value(surface)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("surface.svg", &context)?;
    Ok(rendered)
}

use notefolio_core::models::layout::LayoutSettings;

/// Preview surface width: A4 at the 96 dpi reference scale.
pub const PAGE_WIDTH_PX: u32 = 794;
/// One page of surface height at the same scale.
pub const PAGE_HEIGHT_PX: u32 = 1123;
/// Rasterization oversampling factor; keeps text legible after compression.
pub const OVERSAMPLE: u32 = 2;

/// Uniform margin around the page content.
pub const PAGE_MARGIN_PX: f32 = 40.0;
/// Horizontal gap between the two columns.
pub const COLUMN_GAP_PX: f32 = 16.0;

/// Resolved styling for one surface render, in surface pixels.
#[derive(Debug, Clone)]
pub struct SurfaceStyles {
    /// Body text size.
    pub font_size: f32,
    /// Topic heading size.
    pub heading_size: f32,
    pub line_gap: f32,
    pub paragraph_gap: f32,
    pub left_column_gap: f32,
    pub right_column_gap: f32,
    pub font_family: String,
    pub column_width: f32,
}

impl SurfaceStyles {
    /// Resolve user layout settings into surface pixels.
    /// Point sizes scale at the CSS ratio of 96 px per 72 pt.
    pub fn from_settings(settings: &LayoutSettings) -> Self {
        let font_size = f32::from(settings.clamped_font_size()) * 96.0 / 72.0;
        Self {
            font_size,
            heading_size: font_size * 1.15,
            line_gap: f32::from(settings.line_gap),
            paragraph_gap: f32::from(settings.paragraph_gap),
            left_column_gap: f32::from(settings.left_column_gap),
            right_column_gap: f32::from(settings.right_column_gap),
            font_family: "sans-serif".to_string(),
            column_width: (PAGE_WIDTH_PX as f32 - 2.0 * PAGE_MARGIN_PX - COLUMN_GAP_PX) / 2.0,
        }
    }

    /// Vertical advance for one wrapped line of body text.
    pub fn line_height(&self) -> f32 {
        self.font_size * 1.3 + self.line_gap
    }
}

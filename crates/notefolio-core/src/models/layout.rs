use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Smallest selectable font size in points.
pub const MIN_FONT_SIZE: u8 = 4;
/// Largest selectable font size in points.
pub const MAX_FONT_SIZE: u8 = 16;

/// User-tunable preview layout parameters.
///
/// Gaps are in CSS pixels at the preview's 96 dpi reference scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LayoutSettings {
    /// Body font size in points.
    pub font_size: u8,
    /// Extra spacing between wrapped lines.
    pub line_gap: u16,
    /// Spacing between paragraphs within a block.
    pub paragraph_gap: u16,
    /// Vertical spacing between blocks in the left column.
    pub left_column_gap: u16,
    /// Vertical spacing between blocks in the right column.
    pub right_column_gap: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            font_size: 9,
            line_gap: 2,
            paragraph_gap: 6,
            left_column_gap: 12,
            right_column_gap: 12,
        }
    }
}

impl LayoutSettings {
    /// Font size clamped to the selectable range.
    pub fn clamped_font_size(&self) -> u8 {
        self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    }
}

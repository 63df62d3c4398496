//! Layout pass: projects the parity-split columns into positioned text
//! lines and image boxes on the preview surface.
//!
//! Wrapping estimates glyph width from the font size; the surface is not
//! a text shaper, and lines may break a little early.

use serde::Serialize;

use notefolio_core::models::block::ContentBlock;
use notefolio_core::models::document::split_columns;
use notefolio_core::models::layout::LayoutSettings;

use crate::styles::{
    SurfaceStyles, COLUMN_GAP_PX, PAGE_HEIGHT_PX, PAGE_MARGIN_PX, PAGE_WIDTH_PX,
};

/// One positioned text line. `y` is the baseline, SVG-style.
#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font_size: f32,
    pub bold: bool,
}

/// One positioned inline image box.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedImage {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub href: String,
}

/// The fully positioned preview surface, ready for the SVG template.
#[derive(Debug, Clone, Serialize)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub font_family: String,
    pub lines: Vec<Line>,
    pub images: Vec<PlacedImage>,
}

/// Project the document into a positioned surface.
///
/// Even-indexed blocks fill the left column, odd-indexed the right, each
/// column stacking top-down in append order. Surface height grows with
/// content but is never less than one page.
pub fn lay_out(blocks: &[ContentBlock], settings: &LayoutSettings) -> Surface {
    let styles = SurfaceStyles::from_settings(settings);
    let (left, right) = split_columns(blocks);

    let mut lines = Vec::new();
    let mut images = Vec::new();

    let left_x = PAGE_MARGIN_PX;
    let right_x = PAGE_MARGIN_PX + styles.column_width + COLUMN_GAP_PX;

    let left_bottom = lay_out_column(
        &left,
        left_x,
        styles.left_column_gap,
        &styles,
        &mut lines,
        &mut images,
    );
    let right_bottom = lay_out_column(
        &right,
        right_x,
        styles.right_column_gap,
        &styles,
        &mut lines,
        &mut images,
    );

    let content_bottom = left_bottom.max(right_bottom) + PAGE_MARGIN_PX;
    let height = (content_bottom.ceil() as u32).max(PAGE_HEIGHT_PX);

    Surface {
        width: PAGE_WIDTH_PX,
        height,
        font_family: styles.font_family.clone(),
        lines,
        images,
    }
}

fn lay_out_column(
    blocks: &[&ContentBlock],
    x: f32,
    block_gap: f32,
    styles: &SurfaceStyles,
    lines: &mut Vec<Line>,
    images: &mut Vec<PlacedImage>,
) -> f32 {
    let mut y = PAGE_MARGIN_PX;
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            y += block_gap;
        }
        y = lay_out_block(block, x, y, styles, lines, images);
    }
    y
}

/// Place one block at the column cursor; returns the new cursor.
fn lay_out_block(
    block: &ContentBlock,
    x: f32,
    mut y: f32,
    styles: &SurfaceStyles,
    lines: &mut Vec<Line>,
    images: &mut Vec<PlacedImage>,
) -> f32 {
    let heading_advance = styles.heading_size * 1.3 + styles.line_gap;
    for text in wrap_text(&block.topic, styles.heading_size, styles.column_width) {
        lines.push(Line {
            x,
            y: y + styles.heading_size,
            text,
            font_size: styles.heading_size,
            bold: true,
        });
        y += heading_advance;
    }

    for (i, paragraph) in block.paragraphs().iter().enumerate() {
        if i > 0 {
            y += styles.paragraph_gap;
        }
        for text in wrap_text(paragraph, styles.font_size, styles.column_width) {
            lines.push(Line {
                x,
                y: y + styles.font_size,
                text,
                font_size: styles.font_size,
                bold: false,
            });
            y += styles.line_height();
        }
    }

    for image in &block.images {
        y += styles.paragraph_gap;
        // Fixed 4:3 box at column width; the renderer letterboxes the
        // actual image inside it, preserving aspect ratio.
        let height = styles.column_width * 0.75;
        images.push(PlacedImage {
            x,
            y,
            width: styles.column_width,
            height,
            href: image.data_uri.clone(),
        });
        y += height;
    }

    y
}

/// Greedy word wrap by estimated glyph width (half the font size per
/// character). Words longer than a full line are hard-split.
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let max_chars = ((max_width / (font_size * 0.5)).floor() as usize).max(1);

    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            let head: String = word.chars().take(max_chars).collect();
            if !current.is_empty() {
                wrapped.push(std::mem::take(&mut current));
            }
            word = &word[head.len()..];
            wrapped.push(head);
        }

        let sep = usize::from(!current.is_empty());
        if current.chars().count() + sep + word.chars().count() > max_chars
            && !current.is_empty()
        {
            wrapped.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        wrapped.push(current);
    }

    wrapped
}

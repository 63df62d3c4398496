//! Page slicing: the raster strip is exactly one page wide, and each output
//! page shows the strip shifted up by an accumulated offset. This is the
//! shift-and-clip alternative to text reflow — a block may split at an
//! arbitrary pixel row across a page boundary, which is accepted.

use crate::styles::{OVERSAMPLE, PAGE_HEIGHT_PX};

/// One page of strip height, in raster pixels.
pub const PAGE_STRIDE_PX: u32 = PAGE_HEIGHT_PX * OVERSAMPLE;

/// The per-page vertical offsets into the raster strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    /// Starting strip offset of each output page, in raster pixels.
    pub offsets: Vec<u32>,
    pub strip_height: u32,
    pub page_height: u32,
}

/// Plan pages for a strip at the standard page stride.
pub fn plan_pages(strip_height: u32) -> PagePlan {
    PagePlan {
        offsets: plan_offsets(strip_height, PAGE_STRIDE_PX),
        strip_height,
        page_height: PAGE_STRIDE_PX,
    }
}

/// Compute page offsets: the first page always starts at 0, and each
/// further page advances by one page height while un-consumed strip height
/// remains.
///
/// When the strip height is an exact multiple of the page height the stride
/// overshoots by one page; that trailing page would start at or beyond the
/// end of the strip and show nothing, so it is discarded.
pub fn plan_offsets(strip_height: u32, page_height: u32) -> Vec<u32> {
    let mut offsets = vec![0];
    let mut height_left = i64::from(strip_height) - i64::from(page_height);
    while height_left >= 0 {
        offsets.push((i64::from(strip_height) - height_left) as u32);
        height_left -= i64::from(page_height);
    }

    if offsets.last().is_some_and(|&last| last >= strip_height) {
        offsets.pop();
    }

    offsets
}

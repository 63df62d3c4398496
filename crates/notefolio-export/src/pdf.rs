use printpdf::{Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, RawImage, XObjectTransform};

use crate::error::ExportError;
use crate::paginate::PagePlan;
use crate::styles::OVERSAMPLE;

/// Output page size: A4.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
const PAGE_HEIGHT_PT: f32 = PAGE_HEIGHT_MM * 72.0 / 25.4;

/// Effective resolution of the raster strip (96 css-dpi × oversampling).
const RASTER_DPI: f32 = 96.0 * OVERSAMPLE as f32;

/// Assemble the multi-page PDF from the encoded strip and the page plan.
///
/// The strip is embedded once as a shared image XObject. Every page places
/// that same image so its top edge starts one accumulated offset above the
/// page top — the page viewport clips out everything but its slice.
pub fn assemble_pdf(strip_png: &[u8], plan: &PagePlan) -> Result<Vec<u8>, ExportError> {
    let mut warnings = Vec::new();

    let strip = RawImage::decode_from_bytes(strip_png, &mut warnings)
        .map_err(|e| ExportError::Pdf(format!("strip decode failed: {e}")))?;

    let mut doc = PdfDocument::new("Formatted Notes");
    let strip_id = doc.add_image(&strip);

    let strip_height_pt = px_to_pt(plan.strip_height);

    let pages: Vec<PdfPage> = plan
        .offsets
        .iter()
        .map(|&offset| {
            // PDF anchors images at their bottom-left corner. Lining the
            // strip's top edge up with the page's top edge means lifting
            // the bottom by (page − strip), then by the consumed offset.
            let translate_y = PAGE_HEIGHT_PT - strip_height_pt + px_to_pt(offset);
            let ops = vec![Op::UseXobject {
                id: strip_id.clone(),
                transform: XObjectTransform {
                    translate_x: Some(Pt(0.0)),
                    translate_y: Some(Pt(translate_y)),
                    dpi: Some(RASTER_DPI),
                    ..Default::default()
                },
            }];
            PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), ops)
        })
        .collect();

    let bytes = doc
        .with_pages(pages)
        .save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}

fn px_to_pt(px: u32) -> f32 {
    px as f32 * 72.0 / RASTER_DPI
}

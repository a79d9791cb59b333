use answerdoc_core::filename::derive_filename;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::canvas::{FontFace, PageLayout, layout_pages};
use crate::error::ExportError;
use crate::styles::CanvasStyles;

const LAYER_NAME: &str = "Layer 1";

/// Generate a PDF from answer text.
///
/// The text is laid out with [`layout_pages`] and drawn with the builtin
/// Helvetica faces, so no font files are embedded.
pub fn generate_pdf(text: &str, styles: &CanvasStyles) -> Result<Vec<u8>, ExportError> {
    let layout = layout_pages(text, styles);
    write_pdf(&layout, &derive_filename(text))
}

/// Serialize an already laid out page sequence.
pub fn write_pdf(layout: &PageLayout, title: &str) -> Result<Vec<u8>, ExportError> {
    let width = pt_to_mm(layout.width);
    let height = pt_to_mm(layout.height);

    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut targets = vec![(first_page, first_layer)];
    for _ in 1..layout.pages.len() {
        targets.push(doc.add_page(width, height, LAYER_NAME));
    }

    for (page, (page_index, layer_index)) in layout.pages.iter().zip(targets) {
        let layer = doc.get_page(page_index).get_layer(layer_index);
        for op in &page.ops {
            let font = match op.font.face {
                FontFace::Regular => &regular,
                FontFace::Bold => &bold,
            };
            layer.use_text(op.text.as_str(), op.font.size, pt_to_mm(op.x), pt_to_mm(op.y), font);
        }
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    tracing::debug!(pages = layout.pages.len(), bytes = bytes.len(), "built pdf");

    Ok(bytes)
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

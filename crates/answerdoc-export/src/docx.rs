use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText,
    NumberFormat, Numbering, NumberingId, Paragraph, Run, RunFonts, SpecialIndentType, Start,
    Style, StyleType,
};

use crate::error::ExportError;
use crate::flow::{Alignment, FlowDocument, FlowParagraph, ParagraphKind, build_flow};
use crate::styles::DocumentStyles;

const BULLET_STYLE_ID: &str = "ListBullet";
/// `Docx::new()` already defines abstract numbering and numbering 1 as a
/// decimal list.
const BULLET_NUMBERING_ID: usize = 2;

/// Generate a DOCX document from answer text.
///
/// See [`build_flow`] for how lines map to paragraphs. Blank lines produce
/// nothing.
pub fn generate_docx(text: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let flow = build_flow(text, styles);
    write_docx(&flow, styles)
}

/// Serialize an already built flow model.
pub fn write_docx(flow: &FlowDocument, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(Style::new(BULLET_STYLE_ID, StyleType::Paragraph).name("List Bullet"))
        .add_abstract_numbering(bullet_numbering(styles))
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for paragraph in &flow.paragraphs {
        docx = docx.add_paragraph(docx_paragraph(paragraph, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(paragraphs = flow.paragraphs.len(), bytes = buf.get_ref().len(), "built docx");

    Ok(buf.into_inner())
}

fn bullet_numbering(styles: &DocumentStyles) -> AbstractNumbering {
    AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("\u{2022}"),
            LevelJc::new("left"),
        )
        .indent(
            Some(styles.bullet_indent_twips),
            Some(SpecialIndentType::Hanging(styles.bullet_hanging_twips)),
            None,
            None,
        ),
    )
}

fn docx_paragraph(paragraph: &FlowParagraph, styles: &DocumentStyles) -> Paragraph {
    let align = match paragraph.alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
    };

    let mut para = Paragraph::new().align(align);
    if paragraph.kind == ParagraphKind::Bullet {
        para = para
            .style(BULLET_STYLE_ID)
            .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
    }

    for run in &paragraph.runs {
        let mut docx_run = Run::new()
            .add_text(&run.text)
            .size(paragraph.size * 2) // OOXML uses half-points
            .fonts(RunFonts::new().ascii(&styles.body_font));
        if run.bold {
            docx_run = docx_run.bold();
        }
        para = para.add_run(docx_run);
    }

    para
}

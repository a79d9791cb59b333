use answerdoc_core::markup::{ClassifiedLine, LineKind, classify_text};
use answerdoc_core::spans::split_spans;
use serde::Serialize;

use crate::styles::DocumentStyles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
}

/// Which visual treatment a paragraph gets in the word-processing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphKind {
    Title,
    Subheading,
    Bullet,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowRun {
    pub text: String,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowParagraph {
    pub kind: ParagraphKind,
    /// Font size in points.
    pub size: usize,
    pub bold: bool,
    pub alignment: Alignment,
    pub runs: Vec<FlowRun>,
}

impl FlowParagraph {
    /// Concatenated run text.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Paragraph-based document model, one paragraph per non-blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowDocument {
    pub paragraphs: Vec<FlowParagraph>,
}

/// Build the flow model for an answer.
///
/// - `# Title` → bold, centered, `title_size`
/// - `## Subheading` → bold, left, `subheading_size`
/// - `- item` / `* item` → bullet paragraph, one plain run
/// - anything else → body paragraph, one run per `**bold**` span
///
/// Only body lines are split into emphasis spans; titles, subheadings and
/// bullets keep their text verbatim in a single run.
pub fn build_flow(text: &str, styles: &DocumentStyles) -> FlowDocument {
    FlowDocument {
        paragraphs: classify_text(text)
            .map(|line| paragraph_for(line, styles))
            .collect(),
    }
}

fn paragraph_for(line: ClassifiedLine, styles: &DocumentStyles) -> FlowParagraph {
    match line.kind {
        LineKind::Title => FlowParagraph {
            kind: ParagraphKind::Title,
            size: styles.title_size,
            bold: true,
            alignment: Alignment::Center,
            runs: vec![FlowRun {
                text: line.text,
                bold: true,
            }],
        },
        LineKind::Subheading => FlowParagraph {
            kind: ParagraphKind::Subheading,
            size: styles.subheading_size,
            bold: true,
            alignment: Alignment::Left,
            runs: vec![FlowRun {
                text: line.text,
                bold: true,
            }],
        },
        LineKind::BulletItem => FlowParagraph {
            kind: ParagraphKind::Bullet,
            size: styles.body_size,
            bold: false,
            alignment: Alignment::Left,
            runs: vec![FlowRun {
                text: line.text,
                bold: false,
            }],
        },
        LineKind::BodyText => FlowParagraph {
            kind: ParagraphKind::Body,
            size: styles.body_size,
            bold: false,
            alignment: Alignment::Left,
            runs: split_spans(&line.text)
                .into_iter()
                .map(|span| FlowRun {
                    bold: span.is_bold(),
                    text: span.text,
                })
                .collect(),
        },
    }
}

use answerdoc_core::markup::{LineKind, classify_text};
use answerdoc_core::spans::strip_bold;
use serde::Serialize;

use crate::styles::CanvasStyles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFace {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontSpec {
    pub face: FontFace,
    pub size: f32,
}

/// One line of text at an absolute position on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawOp {
    pub x: f32,
    /// Baseline, measured up from the bottom edge.
    pub y: f32,
    pub text: String,
    pub font: FontSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// Fixed-size pages of positioned text. Page boundaries are the page breaks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub pages: Vec<Page>,
}

impl PageLayout {
    /// Every draw operation in reading order.
    pub fn ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.pages.iter().flat_map(|p| p.ops.iter())
    }
}

/// Lay out an answer onto pages with a single vertical cursor.
///
/// The cursor starts `top_margin` below the top edge. Each line is drawn at
/// the cursor, then the cursor moves down by the line's advance. As soon as
/// the cursor is below `bottom_margin` the page is closed and a fresh one is
/// started, even after the last line (the output then ends on a blank page).
/// Bold markers are flattened to plain text; the canvas has no inline
/// emphasis.
pub fn layout_pages(text: &str, styles: &CanvasStyles) -> PageLayout {
    let body = FontSpec {
        face: FontFace::Regular,
        size: styles.body_size,
    };
    let top = styles.page_height - styles.top_margin;

    let mut pages = vec![Page::default()];
    let mut y = top;

    for line in classify_text(text) {
        let (x, text, font, advance) = match line.kind {
            LineKind::Title => (
                styles.left_margin,
                line.text,
                FontSpec {
                    face: FontFace::Bold,
                    size: styles.title_size,
                },
                styles.title_advance,
            ),
            LineKind::Subheading => (
                styles.left_margin,
                line.text,
                FontSpec {
                    face: FontFace::Bold,
                    size: styles.subheading_size,
                },
                styles.subheading_advance,
            ),
            LineKind::BulletItem => (
                styles.bullet_indent,
                format!("\u{2022} {}", strip_bold(&line.text)),
                body,
                styles.line_advance,
            ),
            LineKind::BodyText => (
                styles.left_margin,
                strip_bold(&line.text),
                body,
                styles.line_advance,
            ),
        };

        if let Some(page) = pages.last_mut() {
            page.ops.push(DrawOp { x, y, text, font });
        }
        y -= advance;

        if y < styles.bottom_margin {
            pages.push(Page::default());
            y = top;
        }
    }

    tracing::debug!(pages = pages.len(), "laid out canvas");

    PageLayout {
        width: styles.page_width,
        height: styles.page_height,
        pages,
    }
}

use serde::{Deserialize, Serialize};

/// Styling for the flowed DOCX output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for every run (e.g. "Calibri", "Times New Roman").
    pub body_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// `# Title` font size in points.
    pub title_size: usize,

    /// `## Subheading` font size in points.
    pub subheading_size: usize,

    /// Left indent of bullet paragraphs, in twips.
    pub bullet_indent_twips: i32,

    /// Hanging indent of the bullet glyph, in twips.
    pub bullet_hanging_twips: i32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            body_size: 11,
            title_size: 20,
            subheading_size: 16,
            bullet_indent_twips: 720,
            bullet_hanging_twips: 360,
        }
    }
}

/// Geometry and fonts for the paginated PDF canvas. All lengths are PDF
/// points with the origin at the bottom-left of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasStyles {
    pub page_width: f32,
    pub page_height: f32,

    /// Distance from the top edge to the first baseline on each page.
    pub top_margin: f32,

    /// The cursor may not drop below this before a page break.
    pub bottom_margin: f32,

    /// x of titles, subheadings and body lines.
    pub left_margin: f32,

    /// x of bullet lines.
    pub bullet_indent: f32,

    pub title_size: f32,
    pub subheading_size: f32,
    pub body_size: f32,

    pub title_advance: f32,
    pub subheading_advance: f32,
    pub line_advance: f32,
}

/// A4 width in points.
pub const A4_WIDTH: f32 = 595.2756;
/// A4 height in points.
pub const A4_HEIGHT: f32 = 841.8898;

impl Default for CanvasStyles {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            top_margin: 50.0,
            bottom_margin: 50.0,
            left_margin: 50.0,
            bullet_indent: 70.0,
            title_size: 20.0,
            subheading_size: 16.0,
            body_size: 12.0,
            title_advance: 30.0,
            subheading_advance: 25.0,
            line_advance: 18.0,
        }
    }
}

/// Both style sets, as handed to [`crate::export::export`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportStyles {
    pub document: DocumentStyles,
    pub canvas: CanvasStyles,
}

use thiserror::Error;

/// Serialization failures. Building the document models cannot fail; only
/// encoding them into a container format can.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

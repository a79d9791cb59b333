use answerdoc_core::filename::derive_filename;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::styles::ExportStyles;
use crate::{docx, pdf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Docx,
    Pdf,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// A finished download: complete bytes plus how to label them.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

/// Render answer text in the requested format.
///
/// Failures are logged here and returned whole; no partial bytes escape.
pub fn export(
    text: &str,
    format: ExportFormat,
    styles: &ExportStyles,
) -> Result<ExportedDocument, ExportError> {
    let result = match format {
        ExportFormat::Docx => docx::generate_docx(text, &styles.document),
        ExportFormat::Pdf => pdf::generate_pdf(text, &styles.canvas),
    };

    let bytes = result.inspect_err(|e| {
        tracing::error!(format = format.extension(), error = %e, "export failed");
    })?;

    let filename = format!("{}.{}", derive_filename(text), format.extension());
    tracing::info!(
        format = format.extension(),
        filename = %filename,
        bytes = bytes.len(),
        "exported answer"
    );

    Ok(ExportedDocument {
        bytes,
        content_type: format.content_type(),
        filename,
    })
}

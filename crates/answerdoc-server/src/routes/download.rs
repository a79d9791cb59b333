use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use answerdoc_export::export::{ExportFormat, export};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn download_doc(State(state): State<AppState>) -> Result<Response, ApiError> {
    download(&state, ExportFormat::Docx)
}

pub async fn download_pdf(State(state): State<AppState>) -> Result<Response, ApiError> {
    download(&state, ExportFormat::Pdf)
}

/// Render the current answer as an attachment. Rendering runs to completion
/// on the request task; it is pure in-memory work.
fn download(state: &AppState, format: ExportFormat) -> Result<Response, ApiError> {
    let answer = state.answer.get();
    let doc = export(&answer, format, &state.styles)?;

    let headers = [
        (header::CONTENT_TYPE, doc.content_type.to_string()),
        (header::CONTENT_DISPOSITION, content_disposition(&doc.filename, format)),
    ];

    Ok((headers, doc.bytes).into_response())
}

/// `attachment; filename=...`, with an RFC 5987 `filename*` for names that
/// are not plain ASCII (header values must be visible ASCII).
pub fn content_disposition(filename: &str, format: ExportFormat) -> String {
    if filename.is_ascii() {
        return format!("attachment; filename={filename}");
    }

    let mut encoded = String::with_capacity(filename.len() * 3);
    for byte in filename.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-') {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    format!(
        "attachment; filename=answer.{}; filename*=UTF-8''{encoded}",
        format.extension()
    )
}

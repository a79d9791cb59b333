use crate::markup::{LineKind, classify_text};

/// Fallback stem when the text yields no usable characters.
pub const DEFAULT_FILENAME: &str = "Generated_Content";

/// Maximum length of a derived stem, in characters.
pub const MAX_FILENAME_CHARS: usize = 50;

/// Derive a download filename stem (no extension) from an answer.
///
/// Prefers the first `# Title` line anywhere in the text, else the first
/// line. Each run of non-word characters becomes one `_`, and the result is
/// capped at [`MAX_FILENAME_CHARS`].
pub fn derive_filename(text: &str) -> String {
    let source = classify_text(text)
        .find(|line| line.kind == LineKind::Title)
        .map(|line| line.text)
        .unwrap_or_else(|| text.trim().lines().next().unwrap_or_default().to_string());

    let stem: String = sanitize(&source).chars().take(MAX_FILENAME_CHARS).collect();
    if stem.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        stem
    }
}

fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_gap = false;
    for c in raw.chars() {
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
            in_gap = false;
        } else if !in_gap {
            out.push('_');
            in_gap = true;
        }
    }
    out
}

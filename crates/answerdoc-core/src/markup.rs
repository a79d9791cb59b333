use serde::{Deserialize, Serialize};

/// Block-level role of a single line of generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// `# Title`
    Title,
    /// `## Subheading` (any depth of two or more `#`)
    Subheading,
    /// `- item` or `* item`
    BulletItem,
    /// Everything else. Inline `**bold**` is left in place for the span splitter.
    BodyText,
}

/// A non-blank line with its block markup stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub text: String,
}

/// Classify one line. Returns `None` for blank lines, which never produce
/// output in either renderer.
///
/// Classification is total: every string maps to exactly one kind.
pub fn classify(line: &str) -> Option<ClassifiedLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let hashes = trimmed.len() - trimmed.trim_start_matches('#').len();
    let after_hashes = &trimmed[hashes..];

    if hashes == 1 && after_hashes.starts_with(' ') {
        let text = trimmed.trim_start_matches(['#', ' ']).trim();
        return Some(ClassifiedLine {
            kind: LineKind::Title,
            text: text.to_string(),
        });
    }

    if hashes >= 2 && after_hashes.starts_with(' ') {
        return Some(ClassifiedLine {
            kind: LineKind::Subheading,
            text: after_hashes.trim().to_string(),
        });
    }

    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Some(ClassifiedLine {
            kind: LineKind::BulletItem,
            text: rest.trim().to_string(),
        });
    }

    Some(ClassifiedLine {
        kind: LineKind::BodyText,
        text: trimmed.to_string(),
    })
}

/// Classify every line of a text block, dropping blank lines and keeping
/// the rest in source order.
pub fn classify_text(text: &str) -> impl Iterator<Item = ClassifiedLine> + '_ {
    text.lines().filter_map(classify)
}

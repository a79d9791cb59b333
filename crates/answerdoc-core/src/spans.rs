use serde::{Deserialize, Serialize};

const MARKER: &str = "**";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Plain,
    Bold,
}

/// A stretch of a line with uniform emphasis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Bold,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.emphasis == Emphasis::Bold
    }
}

/// Split a line into plain and bold spans on `**` delimiter pairs.
///
/// Each opening marker pairs with the nearest following marker. A marker
/// with no partner is literal text: the remainder of the line from that
/// marker onward becomes a single plain span. Empty plain stretches are not
/// emitted; empty bold spans (`****`) are.
pub fn split_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut remaining = line;

    while let Some(open) = remaining.find(MARKER) {
        let after_open = &remaining[open + MARKER.len()..];
        let Some(close) = after_open.find(MARKER) else {
            break;
        };

        let before = &remaining[..open];
        if !before.is_empty() {
            spans.push(Span::plain(before));
        }
        spans.push(Span::bold(&after_open[..close]));
        remaining = &after_open[close + MARKER.len()..];
    }

    if !remaining.is_empty() {
        spans.push(Span::plain(remaining));
    }

    spans
}

/// The line with every matched `**` pair removed and nothing else changed.
pub fn strip_bold(line: &str) -> String {
    split_spans(line).into_iter().map(|s| s.text).collect()
}

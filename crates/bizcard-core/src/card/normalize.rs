//! OCR text normalization.

/// A trimmed, non-empty line with its position in the raw input.
///
/// The position drives the area heuristics: name and company live in the
/// top lines of a card, the address near the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Zero-based index of the line in the raw text.
    pub index: usize,

    /// Trimmed line content.
    pub text: String,
}

/// Dual view of the raw OCR text.
///
/// Line heuristics need the original line boundaries; the regex extractors
/// work better on whitespace-collapsed text where a value wrapped across
/// lines still matches.
#[derive(Debug, Clone, Default)]
pub struct NormalizedText {
    /// Whitespace-collapsed, quote-normalized single-line text.
    pub text: String,

    /// Trimmed non-empty lines of the raw text, in original order.
    pub lines: Vec<Line>,
}

/// Normalize raw OCR output. Empty input yields empty outputs.
pub fn normalize(raw: &str) -> NormalizedText {
    let text = raw
        .replace(['\u{2018}', '\u{2019}'], "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let lines = raw
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Line {
                    index,
                    text: trimmed.to_string(),
                })
            }
        })
        .collect();

    NormalizedText { text, lines }
}

//! Phone number extraction and cleaning.

use super::CandidateExtractor;
use super::patterns::{PHONE, PHONE_LOOSE};
use crate::card::normalize::NormalizedText;
use crate::models::config::ParserConfig;

/// Phone candidates that survived cleaning.
#[derive(Debug, Clone, Default)]
pub struct PhoneCandidates {
    /// Raw matched substrings of accepted numbers, trimmed, first-seen
    /// order. These back the line exclusion checks: a line containing one
    /// of them must not be reused by the address classifier.
    pub raw: Vec<String>,

    /// Cleaned numbers: digits with an optional single leading `+`.
    pub cleaned: Vec<String>,
}

/// Phone candidate extractor.
pub struct PhoneExtractor {
    min_digits: usize,
    max_digits: usize,
}

impl PhoneExtractor {
    /// Create an extractor with the default 7-15 digit bounds.
    pub fn new() -> Self {
        Self {
            min_digits: 7,
            max_digits: 15,
        }
    }

    /// Set the accepted digit-count range.
    pub fn with_digit_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_digits = min;
        self.max_digits = max;
        self
    }

    fn accepts(&self, cleaned: &str) -> bool {
        let digits = cleaned.chars().filter(|c| c.is_ascii_digit()).count();
        (self.min_digits..=self.max_digits).contains(&digits)
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateExtractor for PhoneExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        self.extract_all(text).into_iter().next()
    }

    /// Cleaned numbers from the primary pattern, deduplicated, in order.
    fn extract_all(&self, text: &str) -> Vec<String> {
        let mut cleaned = Vec::new();
        for m in PHONE.find_iter(text) {
            let candidate = clean_phone(m.as_str());
            if self.accepts(&candidate) && !cleaned.contains(&candidate) {
                cleaned.push(candidate);
            }
        }
        cleaned
    }
}

/// Strip everything but digits, keeping a single leading `+`.
pub fn clean_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut cleaned = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        cleaned.push('+');
    }
    cleaned.extend(trimmed.chars().filter(char::is_ascii_digit));
    cleaned
}

/// Extract phone candidates from normalized card text.
///
/// Raw matches are deduplicated by trimmed string equality before cleaning;
/// cleaned numbers outside the digit bounds are silently discarded. When
/// nothing survives, each line is rescanned with the looser shape, since
/// the primary pattern sometimes walks past a number embedded in text.
pub fn extract_phones(normalized: &NormalizedText, config: &ParserConfig) -> PhoneCandidates {
    let extractor = PhoneExtractor::new()
        .with_digit_bounds(config.min_phone_digits, config.max_phone_digits);

    let mut candidates = PhoneCandidates::default();
    let mut seen = Vec::new();

    for m in PHONE.find_iter(&normalized.text) {
        let raw = m.as_str().trim().to_string();
        if seen.contains(&raw) {
            continue;
        }
        seen.push(raw.clone());

        let cleaned = clean_phone(&raw);
        if extractor.accepts(&cleaned) && !candidates.cleaned.contains(&cleaned) {
            candidates.raw.push(raw);
            candidates.cleaned.push(cleaned);
        }
    }

    if candidates.cleaned.is_empty() {
        for line in &normalized.lines {
            for m in PHONE_LOOSE.find_iter(&line.text) {
                let raw = m.as_str().trim().to_string();
                let cleaned = clean_phone(&raw);
                if !extractor.accepts(&cleaned) || candidates.cleaned.contains(&cleaned) {
                    continue;
                }
                candidates.raw.push(raw);
                candidates.cleaned.push(cleaned);
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::normalize::normalize;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> PhoneCandidates {
        extract_phones(&normalize(text), &ParserConfig::default())
    }

    #[test]
    fn test_clean_phone() {
        assert_eq!(clean_phone("+1 (555) 123-4567"), "+15551234567");
        assert_eq!(clean_phone("555.123.4567"), "5551234567");
        assert_eq!(clean_phone("  555-1234  "), "5551234");
    }

    #[test]
    fn test_extracts_formatted_number() {
        let candidates = extract("JOHN DOE\n+1 (555) 123-4567\nwww.acme.com");
        assert_eq!(candidates.cleaned, vec!["+15551234567"]);
        assert_eq!(candidates.raw, vec!["+1 (555) 123-4567"]);
    }

    #[test]
    fn test_rejects_short_digit_runs() {
        let candidates = extract("Suite 100\nEst. 1990");
        assert!(candidates.cleaned.is_empty());
        assert!(candidates.raw.is_empty());
    }

    #[test]
    fn test_matches_number_wrapped_across_lines() {
        let candidates = extract("+91 98765\n43210");
        assert_eq!(candidates.cleaned, vec!["+919876543210"]);
    }

    #[test]
    fn test_deduplicates_repeated_numbers() {
        let candidates = extract("555 123 4567\nFax: 555 123 4567");
        assert_eq!(candidates.cleaned, vec!["5551234567"]);
    }

    #[test]
    fn test_loose_fallback_spans_spaced_separators() {
        // " - " breaks the primary pattern, which allows only single-char
        // separators between digit groups.
        let candidates = extract("Jane Smith\nTel: (555) 123 - 4567");
        assert_eq!(candidates.cleaned, vec!["5551234567"]);
    }

    #[test]
    fn test_extractor_applies_digit_bounds() {
        let extractor = PhoneExtractor::new().with_digit_bounds(10, 12);
        assert_eq!(
            extractor.extract_all("+1 (555) 123-4567 and 123 456"),
            vec!["+15551234567"]
        );
        assert_eq!(extractor.extract("12 34"), None);
    }

    #[test]
    fn test_empty_text() {
        let candidates = extract("");
        assert!(candidates.cleaned.is_empty());
    }
}

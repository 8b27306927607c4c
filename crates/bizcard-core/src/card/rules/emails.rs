//! Email address extraction.

use super::CandidateExtractor;
use super::patterns::EMAIL;

/// Email candidate extractor.
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateExtractor for EmailExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        self.extract_all(text).into_iter().next()
    }

    /// All matches lower-cased, in order of appearance. The first is the
    /// primary candidate; the full list backs line exclusion checks.
    fn extract_all(&self, text: &str) -> Vec<String> {
        EMAIL
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}

/// Extract all email candidates from text.
pub fn extract_emails(text: &str) -> Vec<String> {
    EmailExtractor::new().extract_all(text)
}

//! Core library for business card contact extraction.
//!
//! This crate turns raw OCR text from a photographed business card into a
//! structured contact record:
//! - text normalization (whitespace collapsing, line splitting)
//! - pattern extraction for emails, phones, and websites
//! - company/website derivation from the email domain
//! - heuristic line classification for name, designation, company, address
//! - sanitization and record assembly with per-field fallbacks

pub mod card;
pub mod error;
pub mod models;

pub use card::{CardParser, ExtractionResult, HeuristicCardParser, Line, NormalizedText, normalize};
pub use error::{BizcardError, Result};
pub use models::config::ParserConfig;
pub use models::contact::ContactRecord;

/// Extract a contact record from raw OCR text with default settings.
///
/// The single entry point for callers that need neither parser tuning nor
/// extraction metadata. Never fails: unresolved fields come back as empty
/// strings, and empty input yields a record with all text fields empty.
pub fn extract(text: &str, image_data: Option<&str>) -> ContactRecord {
    let parser = HeuristicCardParser::new();
    match image_data {
        Some(image) => parser.parse_with_image(text, image).record,
        None => parser.parse(text).record,
    }
}

//! Heuristic card parser combining pattern extraction and line
//! classification.

use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use crate::models::config::ParserConfig;
use crate::models::contact::ContactRecord;

use super::classify::{self, ClassifierContext};
use super::normalize::normalize;
use super::rules::{derive_domains, extract_emails, extract_phones, extract_website};
use super::sanitize::{canonical_website, clean_general};

/// Result of card extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Assembled contact record.
    pub record: ContactRecord,
    /// Raw input text.
    pub raw_text: String,
    /// Extraction warnings: unresolved fields and invariant issues.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for card parsing.
pub trait CardParser {
    /// Parse a contact record from raw OCR text. Never fails: unresolved
    /// fields degrade to empty strings.
    fn parse(&self, text: &str) -> ExtractionResult;

    /// Parse with an opaque image payload carried into the record.
    fn parse_with_image(&self, text: &str, image_data: &str) -> ExtractionResult;
}

/// Heuristic card parser.
///
/// A pure pipeline: normalization, candidate extraction, domain
/// derivation, line classification, sanitization, assembly. Safe to share
/// across threads; each call works on its own intermediate state.
pub struct HeuristicCardParser {
    config: ParserConfig,
}

impl HeuristicCardParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Replace the classifier tunables.
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for HeuristicCardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardParser for HeuristicCardParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        self.parse_with_image(text, "")
    }

    fn parse_with_image(&self, text: &str, image_data: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("parsing card text ({} characters)", text.len());

        let normalized = normalize(text);
        debug!("{} non-empty lines", normalized.lines.len());

        let emails = extract_emails(&normalized.text);
        let phones = extract_phones(&normalized, &self.config);
        let website_text = extract_website(&normalized.text, &emails);

        let derived = derive_domains(
            emails.first().map(String::as_str),
            website_text.as_deref(),
        );

        // Website fallback chain: email-derived, then the on-card string.
        let website = derived
            .website_from_email
            .as_deref()
            .or(website_text.as_deref())
            .map(canonical_website)
            .unwrap_or_default();

        let mut ctx = ClassifierContext::new(
            &self.config,
            &normalized.lines,
            &emails,
            &phones.raw,
            website_text.as_deref(),
            &website,
            &derived,
        );
        classify::name::resolve(&mut ctx);
        classify::designation::resolve(&mut ctx);
        classify::company::resolve(&mut ctx);
        classify::address::resolve(&mut ctx);

        let name = clean_general(&ctx.name);
        let mut designation = clean_general(&ctx.designation);
        if !name.is_empty() && designation == name {
            designation.clear();
        }
        let company = clean_general(&ctx.company);
        let address = clean_general(&ctx.address);

        let record = ContactRecord {
            id: Uuid::new_v4().to_string(),
            name,
            company,
            designation,
            email: emails.first().cloned().unwrap_or_default(),
            phone: phones.cleaned.first().cloned().unwrap_or_default(),
            website,
            address,
            image_data: image_data.to_string(),
        };

        let mut warnings: Vec<String> = record
            .fields()
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| format!("could not resolve {}", field))
            .collect();
        warnings.extend(record.validate());

        debug!("assembled record {} ({} warnings)", record.id, warnings.len());

        ExtractionResult {
            record,
            raw_text: text.to_string(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> ContactRecord {
        HeuristicCardParser::new().parse(text).record
    }

    #[test]
    fn test_full_card() {
        let record = parse(
            "JOHN DOE\n\
             CEO\n\
             ACME CORPORATION\n\
             john.doe@acme.com\n\
             +1 (555) 123-4567\n\
             www.acme.com\n\
             123 Business Street, Suite 100",
        );

        assert_eq!(record.name, "JOHN DOE");
        assert_eq!(record.designation, "CEO");
        assert_eq!(record.company, "Acme");
        assert_eq!(record.email, "john.doe@acme.com");
        assert_eq!(record.phone, "+15551234567");
        assert_eq!(record.website, "www.acme.com");
        assert_eq!(record.address, "123 Business Street, Suite 100");
        assert_eq!(record.validate(), Vec::<String>::new());
    }

    #[test]
    fn test_name_falls_back_to_email_local_part() {
        let record = parse("jane.smith@example.com\n+44 20 7946 0958");

        assert_eq!(record.name, "Jane Smith");
        assert_eq!(record.company, "Example");
        assert_eq!(record.website, "www.example.com");
        assert_eq!(record.phone, "+442079460958");
        assert_eq!(record.address, "");
        assert_eq!(record.designation, "");
    }

    #[test]
    fn test_no_address_present() {
        let record = parse("JOHN DOE\njohn@acme.com\n+1 555 123 4567");
        assert_eq!(record.address, "");
    }

    #[test]
    fn test_acronym_line_becomes_company_not_name() {
        let record = parse("IBM\nJane Smith\nSenior Consultant\n10 Tech Park, Floor 3");

        assert_eq!(record.name, "Jane Smith");
        assert_eq!(record.company, "IBM");
        assert_eq!(record.designation, "Senior Consultant");
        assert_eq!(record.address, "10 Tech Park, Floor 3");
    }

    #[test]
    fn test_each_field_from_its_own_line() {
        let record = parse(
            "Jane Smith\n\
             Chief Executive Officer\n\
             Acme Widgets LLC\n\
             45 Market Street, Springfield",
        );

        assert_eq!(record.name, "Jane Smith");
        assert_eq!(record.designation, "Chief Executive Officer");
        assert_eq!(record.company, "Acme Widgets LLC");
        assert_eq!(record.address, "45 Market Street, Springfield");
    }

    #[test]
    fn test_website_derived_from_email_domain() {
        let record = parse("JOHN DOE\njohn@acme.co.in");
        assert_eq!(record.website, "www.acme.co.in");
    }

    #[test]
    fn test_designation_never_equals_name() {
        // A single line carrying only a matching surname-free title must
        // not end up in both fields.
        let record = parse("Marketing\nkim@studio.fm");
        assert_eq!(record.name, "Kim");
        assert!(record.designation == "Marketing" || record.designation.is_empty());
        assert_ne!(record.designation, record.name);
    }

    #[test]
    fn test_empty_input_yields_empty_record() {
        let record = parse("");

        assert!(record.is_empty());
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_idempotent_per_field() {
        let text = "Jane Smith\nDirector\nKalpa Technologies\njane@kalpa.io";
        let first = parse(text);
        let second = parse(text);
        assert_eq!(first.fields(), second.fields());
    }

    #[test]
    fn test_warnings_name_unresolved_fields() {
        let result = HeuristicCardParser::new().parse("");
        assert!(result.warnings.iter().any(|w| w.contains("name")));
        assert!(result.warnings.iter().any(|w| w.contains("address")));
        assert_eq!(result.raw_text, "");
    }

    #[test]
    fn test_image_payload_untouched() {
        let result = HeuristicCardParser::new()
            .parse_with_image("JOHN DOE", "data:image/jpeg;base64,QUJD");
        assert_eq!(result.record.image_data, "data:image/jpeg;base64,QUJD");
    }
}

//! Field classifiers for name, designation, company, and address.
//!
//! The classifiers run in a fixed order and share an accumulator so that a
//! line claimed by an earlier field is not reused by a later one. Every
//! classifier degrades to an empty string; none can fail.

pub mod address;
pub mod company;
pub mod designation;
pub mod name;

use crate::card::normalize::Line;
use crate::card::rules::domain::DerivedDomains;
use crate::card::rules::keywords::{WEBSITE_MARKERS, contains_keyword};
use crate::models::config::ParserConfig;

/// Shared state threaded through the classifiers in sequence.
#[derive(Debug)]
pub struct ClassifierContext<'a> {
    pub config: &'a ParserConfig,
    pub lines: &'a [Line],

    /// Detected emails, lower-cased, in order of appearance.
    pub emails: &'a [String],

    /// Raw substrings of accepted phone numbers.
    pub phone_matches: &'a [String],

    /// Website string found in the text, if any.
    pub website_text: Option<&'a str>,

    /// Final canonical website, empty when unresolved.
    pub website: &'a str,

    /// Values derived from the email domain.
    pub derived: &'a DerivedDomains,

    /// Fields resolved so far, unsanitized.
    pub name: String,
    pub designation: String,
    pub company: String,
    pub address: String,

    /// First designation-keyword line seen during the name scan.
    pub provisional_designation: Option<String>,
}

impl<'a> ClassifierContext<'a> {
    pub fn new(
        config: &'a ParserConfig,
        lines: &'a [Line],
        emails: &'a [String],
        phone_matches: &'a [String],
        website_text: Option<&'a str>,
        website: &'a str,
        derived: &'a DerivedDomains,
    ) -> Self {
        Self {
            config,
            lines,
            emails,
            phone_matches,
            website_text,
            website,
            derived,
            name: String::new(),
            designation: String::new(),
            company: String::new(),
            address: String::new(),
            provisional_designation: None,
        }
    }

    /// True when the line contains a detected email address.
    pub fn contains_email(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.emails.iter().any(|email| lower.contains(email.as_str()))
    }

    /// True when the line contains an accepted phone match.
    pub fn contains_phone(&self, line: &str) -> bool {
        self.phone_matches.iter().any(|phone| line.contains(phone.as_str()))
    }

    /// True when the line reads as a website rather than prose.
    pub fn looks_like_website(&self, line: &str) -> bool {
        contains_keyword(line, WEBSITE_MARKERS)
    }

    /// True when the whole line is already claimed by a resolved field or
    /// an extracted candidate.
    pub fn consumed(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        let claims = |value: &str| !value.is_empty() && value.to_lowercase().contains(&lower);

        claims(&self.name)
            || claims(&self.company)
            || claims(&self.address)
            || claims(self.website)
            || self.website_text.is_some_and(|site| site.contains(&lower))
            || self.emails.iter().any(|email| email.contains(&lower))
            || self
                .phone_matches
                .iter()
                .any(|phone| phone.to_lowercase().contains(&lower))
    }
}

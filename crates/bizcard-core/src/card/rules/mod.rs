//! Rule-based candidate extractors for business card text.

pub mod domain;
pub mod emails;
pub mod keywords;
pub mod patterns;
pub mod phones;
pub mod websites;

pub use domain::{DerivedDomains, derive_domains};
pub use emails::{EmailExtractor, extract_emails};
pub use phones::{PhoneCandidates, PhoneExtractor, clean_phone, extract_phones};
pub use websites::{WebsiteExtractor, extract_website};

/// Trait for candidate extractors.
pub trait CandidateExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first candidate from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all candidates in order of appearance.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

//! Contact record model produced by card extraction.

use serde::{Deserialize, Serialize};

use crate::card::rules::keywords::{ADDRESS_KEYWORDS, DESIGNATION_KEYWORDS, contains_keyword};

/// A structured contact extracted from one business card.
///
/// Every text field is always present; an unresolved field is the empty
/// string, never a placeholder. The record is assembled once and not
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Unique record identifier, assigned at assembly time.
    pub id: String,

    /// Person name.
    pub name: String,

    /// Company name.
    pub company: String,

    /// Job title.
    pub designation: String,

    /// Email address, lower-cased.
    pub email: String,

    /// Phone number: digits with an optional single leading `+`.
    pub phone: String,

    /// Website, `www.`-prefixed when present.
    pub website: String,

    /// Postal address.
    pub address: String,

    /// Source image payload, carried through untouched.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_data: String,
}

impl ContactRecord {
    /// Check whether all seven text fields are empty.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    /// Field name/value pairs for the seven text fields.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("company", self.company.as_str()),
            ("designation", self.designation.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("website", self.website.as_str()),
            ("address", self.address.as_str()),
        ]
    }

    /// Validate the record invariants and return any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.name.chars().any(|c| c.is_ascii_digit()) {
            issues.push("name contains digits".to_string());
        }

        if !self.email.is_empty() && !valid_email(&self.email) {
            issues.push(format!("email is not a valid address: {}", self.email));
        }

        if !self.phone.is_empty() {
            let digits = self.phone.strip_prefix('+').unwrap_or(&self.phone);
            if digits.is_empty()
                || !digits.chars().all(|c| c.is_ascii_digit())
                || !(7..=15).contains(&digits.len())
            {
                issues.push(format!("phone is not 7-15 digits: {}", self.phone));
            }
        }

        if !self.website.is_empty() {
            let rest = self.website.strip_prefix("www.");
            if rest.is_none_or(|r| !r.contains('.')) {
                issues.push(format!("website is not canonical: {}", self.website));
            }
        }

        if !self.designation.is_empty()
            && !contains_keyword(&self.designation, DESIGNATION_KEYWORDS)
        {
            issues.push("designation matches no known title keyword".to_string());
        }

        if !self.address.is_empty() {
            let has_digit = self.address.chars().any(|c| c.is_ascii_digit());
            let has_marker =
                self.address.contains(',') || contains_keyword(&self.address, ADDRESS_KEYWORDS);
            if !has_digit || !has_marker {
                issues.push("address lacks a digit or address marker".to_string());
            }
        }

        issues
    }
}

fn valid_email(email: &str) -> bool {
    if email != email.to_lowercase() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

//! Website candidate extraction.

use super::CandidateExtractor;
use super::patterns::WEBSITE;

/// Website candidate extractor.
pub struct WebsiteExtractor;

impl WebsiteExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WebsiteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateExtractor for WebsiteExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        WEBSITE
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}

/// First domain-like string that is not part of a detected email.
///
/// An email's local part and domain also match the website shape; skipping
/// candidates contained in an extracted email keeps "john.doe" or
/// "acme.com" from posing as the on-card website. A surviving match is
/// still only a candidate, not a verified site.
pub fn extract_website(text: &str, emails: &[String]) -> Option<String> {
    WEBSITE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .find(|candidate| {
            !candidate.contains('@')
                && !emails.iter().any(|email| email.contains(candidate.as_str()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_match_lowercased() {
        let site = extract_website("Visit WWW.ACME.COM or www.other.org", &[]);
        assert_eq!(site.as_deref(), Some("www.acme.com"));
    }

    #[test]
    fn test_skips_email_fragments() {
        let emails = vec!["john.doe@acme.com".to_string()];
        let text = "john.doe@acme.com www.acme.com";
        assert_eq!(
            extract_website(text, &emails).as_deref(),
            Some("www.acme.com")
        );

        // With no separate website string, the email must not produce one.
        assert_eq!(extract_website("john.doe@acme.com", &emails), None);
    }

    #[test]
    fn test_scheme_accepted() {
        let site = extract_website("https://acme.co.in/about", &[]);
        assert_eq!(site.as_deref(), Some("https://acme.co.in/about"));
    }

    #[test]
    fn test_extractor_lists_all_candidates() {
        let extractor = WebsiteExtractor::new();
        assert_eq!(
            extractor.extract_all("www.acme.com and www.other.org"),
            vec!["www.acme.com", "www.other.org"]
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_website("no site here", &[]), None);
    }
}

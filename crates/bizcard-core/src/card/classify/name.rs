//! Person-name classification.

use super::ClassifierContext;
use crate::card::rules::keywords::{DESIGNATION_KEYWORDS, contains_keyword};
use crate::card::rules::patterns::CAPS_RUN;

/// Resolve the person name from the top lines of the card, falling back to
/// the primary email's local part.
///
/// An on-card name always outranks the email-derived one, so the fallback
/// runs only when the scan found nothing.
pub fn resolve(ctx: &mut ClassifierContext<'_>) {
    for line in ctx.lines.iter().take(ctx.config.top_window) {
        let text = line.text.as_str();

        if text.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }
        if ctx.contains_email(text) || ctx.contains_phone(text) {
            continue;
        }
        if ctx.looks_like_website(text) {
            continue;
        }
        if contains_keyword(text, DESIGNATION_KEYWORDS) {
            if ctx.provisional_designation.is_none() {
                ctx.provisional_designation = Some(text.to_string());
            }
            continue;
        }
        if looks_like_person_name(text, ctx.config.max_name_words) {
            ctx.name = text.to_string();
            return;
        }
    }

    if let Some(email) = ctx.emails.first() {
        if let Some(derived) = from_local_part(email, ctx.config.max_name_words) {
            ctx.name = derived;
        }
    }
}

/// Shape test for a person-name line.
///
/// Accepts 1-4 words that are either fully upper-case or strict Title-Case.
/// A single all-caps token ("IBM") is an acronym or brand mark, not a
/// person, and a mixed line with several capital runs is branding.
fn looks_like_person_name(line: &str, max_words: usize) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() || words.len() > max_words {
        return false;
    }

    if !line.chars().any(|c| c.is_lowercase()) {
        let letters = line.chars().filter(|c| c.is_alphabetic()).count();
        return letters > 1 && words.len() >= 2;
    }

    words.iter().all(|word| is_title_word(word)) && CAPS_RUN.find_iter(line).count() <= 1
}

/// Title-Case word: every hyphen/apostrophe segment starts upper-case and
/// continues lower-case. Initials like "A." pass.
fn is_title_word(word: &str) -> bool {
    word.split(['-', '\''])
        .filter(|part| !part.is_empty())
        .all(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) if first.is_uppercase() => {
                    chars.all(|c| c.is_lowercase() || c == '.')
                }
                _ => false,
            }
        })
}

/// Derive a display name from an email local part: dots and underscores
/// become spaces, each word is Title-Cased. Rejected when it carries a
/// digit or does not look like a short human name.
fn from_local_part(email: &str, max_words: usize) -> Option<String> {
    let local = email.split('@').next()?;
    if local.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let words: Vec<String> = local
        .split(['.', '_'])
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect();

    if words.is_empty() || words.len() > max_words {
        return None;
    }
    Some(words.join(" "))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::normalize::normalize;
    use crate::card::rules::domain::DerivedDomains;
    use crate::models::config::ParserConfig;
    use pretty_assertions::assert_eq;

    fn resolve_name(text: &str, emails: &[String]) -> String {
        let config = ParserConfig::default();
        let normalized = normalize(text);
        let derived = DerivedDomains::default();
        let mut ctx = ClassifierContext::new(
            &config,
            &normalized.lines,
            emails,
            &[],
            None,
            "",
            &derived,
        );
        resolve(&mut ctx);
        ctx.name
    }

    #[test]
    fn test_accepts_upper_case_name() {
        assert_eq!(resolve_name("JOHN DOE\nCEO", &[]), "JOHN DOE");
    }

    #[test]
    fn test_accepts_title_case_name() {
        assert_eq!(resolve_name("Jane Smith\nAcme Widgets LLC", &[]), "Jane Smith");
    }

    #[test]
    fn test_accepts_hyphen_and_initial() {
        assert_eq!(resolve_name("Jean-Pierre A. Dupont", &[]), "Jean-Pierre A. Dupont");
    }

    #[test]
    fn test_rejects_single_acronym() {
        // "IBM" is an acronym, not a person; with no email there is no
        // fallback either.
        assert_eq!(resolve_name("IBM\n", &[]), "");
    }

    #[test]
    fn test_skips_lines_with_digits_or_candidates() {
        let emails = vec!["jane@acme.com".to_string()];
        let name = resolve_name("4th Edition\njane@acme.com\nJane Smith", &emails);
        assert_eq!(name, "Jane Smith");
    }

    #[test]
    fn test_skips_website_like_lines() {
        assert_eq!(resolve_name("www.acme.com\nJohn Doe", &[]), "John Doe");
    }

    #[test]
    fn test_keyword_line_becomes_provisional_designation() {
        let config = ParserConfig::default();
        let normalized = normalize("Chief Executive Officer\nJohn Doe");
        let derived = DerivedDomains::default();
        let mut ctx =
            ClassifierContext::new(&config, &normalized.lines, &[], &[], None, "", &derived);
        resolve(&mut ctx);

        assert_eq!(ctx.name, "John Doe");
        assert_eq!(
            ctx.provisional_designation.as_deref(),
            Some("Chief Executive Officer")
        );
    }

    #[test]
    fn test_falls_back_to_email_local_part() {
        let emails = vec!["jane.smith@example.com".to_string()];
        assert_eq!(resolve_name("example.com\n+1 555", &emails), "Jane Smith");
    }

    #[test]
    fn test_on_card_name_outranks_email_derived() {
        let emails = vec!["jon.doe@acme.com".to_string()];
        let name = resolve_name("Jonathan Doe\njon.doe@acme.com", &emails);
        assert_eq!(name, "Jonathan Doe");
    }

    #[test]
    fn test_derived_name_rejects_digits() {
        let emails = vec!["agent007@example.com".to_string()];
        assert_eq!(resolve_name("", &emails), "");
    }

    #[test]
    fn test_rejects_long_lines() {
        assert_eq!(
            resolve_name("We Build The Very Best Widgets Around", &[]),
            ""
        );
    }
}

//! Postal-address classification.

use super::ClassifierContext;
use crate::card::rules::keywords::{ADDRESS_KEYWORDS, contains_keyword};

/// Resolve the address, scanning from the last line backward: addresses
/// cluster at the bottom of a card.
///
/// When no single line qualifies, consecutive lines near the bottom are
/// joined and retested, since OCR often breaks one postal address across
/// physical lines. The longest qualifying join wins.
pub fn resolve(ctx: &mut ClassifierContext<'_>) {
    for line in ctx.lines.iter().rev() {
        let text = line.text.as_str();
        if ctx.contains_email(text) || ctx.contains_phone(text) {
            continue;
        }
        if qualifies(text, ctx.config.min_address_line_len) {
            ctx.address = text.to_string();
            return;
        }
    }

    let tail: Vec<&str> = ctx
        .lines
        .iter()
        .rev()
        .take(ctx.config.address_window)
        .map(|line| line.text.as_str())
        .filter(|text| !ctx.contains_email(text) && !ctx.contains_phone(text))
        .collect();
    let tail: Vec<&str> = tail.into_iter().rev().collect();

    let mut best = String::new();
    for width in 2..=ctx.config.address_join_lines {
        for window in tail.windows(width) {
            let joined = window.join(", ");
            if qualifies(&joined, ctx.config.min_address_line_len) && joined.len() > best.len() {
                best = joined;
            }
        }
    }
    ctx.address = best;
}

/// Address acceptance test: long enough, carries a digit, and reads like
/// an address (comma or keyword).
fn qualifies(text: &str, min_len: usize) -> bool {
    text.len() > min_len
        && text.chars().any(|c| c.is_ascii_digit())
        && (text.contains(',') || contains_keyword(text, ADDRESS_KEYWORDS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::normalize::normalize;
    use crate::card::rules::domain::DerivedDomains;
    use crate::models::config::ParserConfig;
    use pretty_assertions::assert_eq;

    fn resolve_address(text: &str, emails: &[String], phones: &[String]) -> String {
        let config = ParserConfig::default();
        let normalized = normalize(text);
        let derived = DerivedDomains::default();
        let mut ctx = ClassifierContext::new(
            &config,
            &normalized.lines,
            emails,
            phones,
            None,
            "",
            &derived,
        );
        resolve(&mut ctx);
        ctx.address
    }

    #[test]
    fn test_single_qualifying_line() {
        let address = resolve_address(
            "JOHN DOE\nACME CORPORATION\n123 Business Street, Suite 100",
            &[],
            &[],
        );
        assert_eq!(address, "123 Business Street, Suite 100");
    }

    #[test]
    fn test_bottom_line_wins_over_earlier_one() {
        let address = resolve_address(
            "12 Old Mill Road, Springfield\nJOHN DOE\n99 Harbor Avenue, Portsmouth",
            &[],
            &[],
        );
        assert_eq!(address, "99 Harbor Avenue, Portsmouth");
    }

    #[test]
    fn test_skips_email_and_phone_lines() {
        let emails = vec!["jane@acme.com".to_string()];
        let phones = vec!["+1 (555) 123-4567".to_string()];
        let address = resolve_address(
            "45 Market Street, Springfield\njane@acme.com\n+1 (555) 123-4567",
            &emails,
            &phones,
        );
        assert_eq!(address, "45 Market Street, Springfield");
    }

    #[test]
    fn test_joins_consecutive_short_lines() {
        // No single line passes the length test; the three-line join does.
        let address = resolve_address("Jane Smith\n42 Hill Road\nSector 9\nPune 411001", &[], &[]);
        assert_eq!(address, "42 Hill Road, Sector 9, Pune 411001");
    }

    #[test]
    fn test_no_address() {
        let address = resolve_address("JOHN DOE\nCEO\njane@acme.com", &[], &[]);
        assert_eq!(address, "");
    }
}

//! Company-name classification.

use super::ClassifierContext;
use crate::card::rules::keywords::{COMPANY_SUFFIXES, contains_keyword};

/// Resolve the company name.
///
/// Precedence: email-domain derivation, then website derivation, then the
/// text scan over the logo area at the top of the card.
pub fn resolve(ctx: &mut ClassifierContext<'_>) {
    if let Some(company) = &ctx.derived.company_from_email {
        ctx.company = company.clone();
        return;
    }
    if let Some(company) = &ctx.derived.company_from_website {
        ctx.company = company.clone();
        return;
    }

    for line in ctx.lines.iter().take(ctx.config.top_window) {
        let text = line.text.as_str();

        if ctx.contains_email(text) || ctx.contains_phone(text) {
            continue;
        }
        if overlaps(&ctx.name, text) || overlaps(&ctx.designation, text) {
            continue;
        }
        if text.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }

        let words = text.split_whitespace().count();
        let upper = !text.chars().any(|c| c.is_lowercase())
            && text.chars().filter(|c| c.is_alphabetic()).count() > 1;

        if upper || (2..=6).contains(&words) || contains_keyword(text, COMPANY_SUFFIXES) {
            ctx.company = text.to_string();
            return;
        }
    }
}

fn overlaps(value: &str, line: &str) -> bool {
    !value.is_empty() && (value.contains(line) || line.contains(value))
}

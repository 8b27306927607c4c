//! Job-title classification.

use super::ClassifierContext;
use crate::card::rules::keywords::{DESIGNATION_KEYWORDS, contains_keyword};

/// Resolve the designation: the first line anywhere on the card whose
/// lower-cased text contains a title keyword, excluding lines already
/// claimed by another field. Falls back to the keyword line remembered
/// during the name scan.
pub fn resolve(ctx: &mut ClassifierContext<'_>) {
    for line in ctx.lines.iter() {
        let text = line.text.as_str();
        if ctx.consumed(text) {
            continue;
        }
        if contains_keyword(text, DESIGNATION_KEYWORDS) {
            ctx.designation = text.to_string();
            return;
        }
    }

    if let Some(provisional) = ctx.provisional_designation.take() {
        if provisional != ctx.name {
            ctx.designation = provisional;
        }
    }
}

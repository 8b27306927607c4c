//! Common regex patterns for card field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email: dotted/plussed local part, domain with at least one dot label
    pub static ref EMAIL: Regex = Regex::new(
        r"(?i)[\w.+-]+@[\w-]+(?:\.[\w-]+)+"
    ).unwrap();

    // Phone: optional +, digit groups separated by space/dot/hyphen,
    // parenthesized groups tolerated. Matches any run of 3+ digits, so the
    // digit-count bounds applied during cleaning do the real filtering.
    pub static ref PHONE: Regex = Regex::new(
        r"\+?\(?\d{1,5}\)?(?:[\s.\-]?\(?\d{2,5}\)?){1,5}"
    ).unwrap();

    // Looser per-line fallback shape used when the primary pattern walks
    // past a number embedded in surrounding text.
    pub static ref PHONE_LOOSE: Regex = Regex::new(
        r"\+?[0-9()\s.\-]{7,20}"
    ).unwrap();

    // Website: optional scheme, optional www., dotted label, optional path
    pub static ref WEBSITE: Regex = Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?[a-z0-9][a-z0-9\-]*(?:\.[a-z]{2,})+(?:/[^\s]*)?"
    ).unwrap();

    // Acronym-like run of capitals
    pub static ref CAPS_RUN: Regex = Regex::new(
        r"[A-Z]{3,}"
    ).unwrap();
}

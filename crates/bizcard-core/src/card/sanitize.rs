//! Final per-field cleanup applied during record assembly.

/// Punctuation replaced with spaces in free-text fields. Commas and
/// ampersands stay: addresses keep their separators and company names
/// keep "&". Dots are noise everywhere except websites and emails.
const STRIP: &[char] = &[
    '"', '\'', '`', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '(', ')', '[', ']', '{', '}',
    '<', '>', '-', '_', '/', '\\', '|', '!', '?', ';', ':', '*', '#', '~', '.',
];

/// Clean a free-text field: strip punctuation noise, collapse whitespace,
/// trim. Applied to name, company, designation, and address.
pub fn clean_general(text: &str) -> String {
    collapse(&text.replace(STRIP, " "))
}

/// Clean a website string, preserving `.` and `@` which are structural.
pub fn clean_website(text: &str) -> String {
    let kept: String = text
        .chars()
        .map(|c| {
            if c != '.' && c != '@' && STRIP.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();
    collapse(&kept)
}

/// Canonical form of a website string: scheme stripped, cleaned, and
/// `www.`-prefixed. Dots in the domain are never touched.
pub fn canonical_website(site: &str) -> String {
    let site = site.trim();
    let stripped = site
        .strip_prefix("https://")
        .or_else(|| site.strip_prefix("http://"))
        .unwrap_or(site);

    let cleaned = clean_website(stripped);
    if cleaned.is_empty() || cleaned.starts_with("www.") {
        cleaned
    } else {
        format!("www.{}", cleaned)
    }
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Company and website derivation from email domains.

/// Values derived from the email domain and the on-card website string.
///
/// Pure string transforms: nothing here verifies that a domain resolves or
/// that the company exists.
#[derive(Debug, Clone, Default)]
pub struct DerivedDomains {
    /// Company name from the email domain's first label, capitalized.
    pub company_from_email: Option<String>,

    /// Company name from the website string's first label, capitalized.
    pub company_from_website: Option<String>,

    /// Website for a card with an email: the on-card website string when
    /// one was found, otherwise `www.` plus the email domain.
    pub website_from_email: Option<String>,
}

/// Derive company and website candidates from the primary email and the
/// website string found in the text, if any.
pub fn derive_domains(email: Option<&str>, website_text: Option<&str>) -> DerivedDomains {
    let mut derived = DerivedDomains::default();

    if let Some(email) = email {
        if let Some(domain) = email.split('@').nth(1) {
            let labels: Vec<&str> = domain.split('.').collect();
            // A dotless domain gives neither a brand label nor a website.
            if labels.len() >= 2 && !labels[0].is_empty() {
                derived.company_from_email = Some(capitalize(labels[0]));
                derived.website_from_email = Some(match website_text {
                    Some(site) => site.to_string(),
                    None => format!("www.{}", domain),
                });
            }
        }
    }

    if let Some(site) = website_text {
        let bare = strip_site_prefix(site);
        if let Some(label) = bare.split('.').next() {
            if !label.is_empty() {
                derived.company_from_website = Some(capitalize(label));
            }
        }
    }

    derived
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Strip an optional scheme and `www.` prefix from a website string.
pub fn strip_site_prefix(site: &str) -> &str {
    let site = site
        .strip_prefix("https://")
        .or_else(|| site.strip_prefix("http://"))
        .unwrap_or(site);
    site.strip_prefix("www.").unwrap_or(site)
}

//! Static keyword dictionaries for field classification.
//!
//! All matching is lower-cased substring containment; the lists are small
//! enough that linear scans are fine.

/// Job-title keywords. A line containing any of these is treated as a
/// designation candidate and never as a person name.
pub const DESIGNATION_KEYWORDS: &[&str] = &[
    // Executive
    "ceo",
    "cto",
    "cfo",
    "coo",
    "cmo",
    "cio",
    "chairman",
    "chairperson",
    "president",
    "vice president",
    "vp",
    "founder",
    "co-founder",
    "cofounder",
    "owner",
    "proprietor",
    "partner",
    "principal",
    "director",
    "managing director",
    "executive",
    "officer",
    "chief",
    "head of",
    // Management
    "manager",
    "general manager",
    "supervisor",
    "team lead",
    "coordinator",
    "administrator",
    "superintendent",
    "strategist",
    // Technical
    "engineer",
    "developer",
    "programmer",
    "architect",
    "designer",
    "analyst",
    "scientist",
    "researcher",
    "technician",
    "technologist",
    // Professional services
    "consultant",
    "specialist",
    "advisor",
    "adviser",
    "accountant",
    "auditor",
    "attorney",
    "advocate",
    "lawyer",
    "counsel",
    "banker",
    "broker",
    "realtor",
    "recruiter",
    "trainer",
    // Medical & academic
    "doctor",
    "surgeon",
    "physician",
    "dentist",
    "pharmacist",
    "professor",
    "lecturer",
    // Sales & marketing
    "marketing",
    "sales",
    "representative",
    "agent",
    // Other roles
    "secretary",
    "treasurer",
    "associate",
    "assistant",
    "intern",
    "editor",
    "journalist",
    "photographer",
    "producer",
    "writer",
    "author",
    "freelancer",
    "contractor",
    "entrepreneur",
];

/// Legal-form and trade suffixes that mark a line as a company name.
pub const COMPANY_SUFFIXES: &[&str] = &[
    "inc",
    "llc",
    "llp",
    "ltd",
    "limited",
    "corp",
    "corporation",
    "company",
    "co.",
    "pvt",
    "gmbh",
    "plc",
    "group",
    "holdings",
    "solutions",
    "technologies",
    "technology",
    "systems",
    "services",
    "software",
    "consulting",
    "enterprises",
    "industries",
    "international",
    "global",
    "labs",
    "studio",
    "studios",
    "agency",
    "partners",
    "ventures",
    "associates",
    "networks",
    "media",
    "logistics",
    "foundation",
    "institute",
];

/// Words that mark a line as part of a postal address.
pub const ADDRESS_KEYWORDS: &[&str] = &[
    "street",
    "st.",
    "road",
    "rd.",
    "avenue",
    "ave",
    "boulevard",
    "blvd",
    "lane",
    "drive",
    "court",
    "plaza",
    "square",
    "suite",
    "ste",
    "floor",
    "building",
    "block",
    "tower",
    "apartment",
    "apt",
    "unit",
    "room",
    "sector",
    "phase",
    "zip",
    "p.o.",
    "box",
    "district",
    "city",
    "state",
    "highway",
    "park",
    "nagar",
    "marg",
    "colony",
    "complex",
    "estate",
];

/// Fragments that mark a line as a website rather than a name.
pub const WEBSITE_MARKERS: &[&str] = &[
    "www.", "http", ".com", ".net", ".org", ".io", ".co", ".in", ".biz", ".info", ".us", ".uk",
];

/// Case-insensitive substring check against a keyword list.
pub fn contains_keyword(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_keyword_is_case_insensitive() {
        assert!(contains_keyword("Chief Executive Officer", DESIGNATION_KEYWORDS));
        assert!(contains_keyword("SENIOR SALES MANAGER", DESIGNATION_KEYWORDS));
        assert!(!contains_keyword("John Doe", DESIGNATION_KEYWORDS));
    }

    #[test]
    fn test_company_suffixes() {
        assert!(contains_keyword("Acme Widgets LLC", COMPANY_SUFFIXES));
        assert!(contains_keyword("Kalpa Technologies", COMPANY_SUFFIXES));
        assert!(!contains_keyword("Jane Smith", COMPANY_SUFFIXES));
    }

    #[test]
    fn test_address_keywords() {
        assert!(contains_keyword("123 Business Street", ADDRESS_KEYWORDS));
        assert!(contains_keyword("Suite 100", ADDRESS_KEYWORDS));
        assert!(!contains_keyword("Acme Widgets", ADDRESS_KEYWORDS));
    }

    #[test]
    fn test_website_markers() {
        assert!(contains_keyword("www.acme.com", WEBSITE_MARKERS));
        assert!(contains_keyword("acme.io", WEBSITE_MARKERS));
        assert!(!contains_keyword("Jane Smith", WEBSITE_MARKERS));
    }
}

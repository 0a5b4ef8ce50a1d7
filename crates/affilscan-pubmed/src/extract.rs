//! Company name and email extraction from affiliation text
//!
//! Both extractors are total: no match is `None`, never an error.

use std::sync::LazyLock;

use regex::Regex;

/// Company name patterns, tried in order. The first pattern that matches
/// wins, even if a later one would give a tighter name.
static COMPANY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "Acme Biotech", "XYZ Pharma Inc": suffix is part of the name
        r"\b([A-Z][a-zA-Z\s&]+?(?:Pharmaceuticals|Biotech|Inc|Ltd|LLC))\b",
        // "Genentech, Inc.": name is what precedes the comma
        r"\b([A-Z][a-zA-Z\s&]+?)\b,\s*(?:LLC|Inc|Ltd|Corp)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid company pattern"))
    .collect()
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("invalid email pattern")
});

/// First company name found in the affiliation, trimmed.
pub fn extract_company_name(affiliation: &str) -> Option<String> {
    COMPANY_PATTERNS.iter().find_map(|re| {
        re.captures(affiliation)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// First email address in the affiliation, verbatim.
pub fn extract_email(affiliation: &str) -> Option<String> {
    EMAIL_PATTERN
        .find(affiliation)
        .map(|m| m.as_str().to_string())
}

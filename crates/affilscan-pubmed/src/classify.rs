//! Company vs. academic affiliation classification
//!
//! Case-insensitive substring matching against two keyword lists. An
//! academic hit always disqualifies, even when a company term also matches.

use std::sync::LazyLock;

pub const DEFAULT_COMPANY_TERMS: &[&str] =
    &["pharma", "biotech", "inc", "ltd", "llc", "corporation"];

pub const DEFAULT_ACADEMIC_TERMS: &[&str] =
    &["university", "college", "institute", "academy", "hospital"];

/// Keyword-based affiliation classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    company_terms: Vec<String>,
    academic_terms: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANY_TERMS, DEFAULT_ACADEMIC_TERMS)
    }
}

impl Classifier {
    /// Build from custom term lists. Terms are lower-cased; blank terms are dropped.
    pub fn new<S: AsRef<str>>(company_terms: &[S], academic_terms: &[S]) -> Self {
        Self {
            company_terms: normalize_terms(company_terms),
            academic_terms: normalize_terms(academic_terms),
        }
    }

    /// True iff the text contains a company term and no academic term.
    pub fn is_company(&self, affiliation: &str) -> bool {
        let lower = affiliation.to_lowercase();
        self.company_terms.iter().any(|t| lower.contains(t.as_str()))
            && !self.academic_terms.iter().any(|t| lower.contains(t.as_str()))
    }

    pub fn company_terms(&self) -> &[String] {
        &self.company_terms
    }

    pub fn academic_terms(&self) -> &[String] {
        &self.academic_terms
    }
}

fn normalize_terms<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms
        .iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);

/// Classify with the default keyword lists.
pub fn classify(affiliation: &str) -> bool {
    DEFAULT_CLASSIFIER.is_company(affiliation)
}

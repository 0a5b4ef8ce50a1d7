//! PubMed pipeline configuration

use crate::classify::{Classifier, DEFAULT_ACADEMIC_TERMS, DEFAULT_COMPANY_TERMS};

/// Runtime configuration for one search/fetch/filter run
#[derive(Debug, Clone)]
pub struct Config {
    /// E-utilities base URL (esearch.fcgi / efetch.fcgi are appended)
    pub base_url: String,
    /// `tool` parameter NCBI asks clients to send
    pub tool: String,
    /// Contact `email` parameter
    pub email: Option<String>,
    /// NCBI API key, raises the rate limit
    pub api_key: Option<String>,
    /// esearch `retmax`
    pub max_results: usize,
    pub company_terms: Vec<String>,
    pub academic_terms: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/".to_string(),
            tool: "affilscan".to_string(),
            email: None,
            api_key: None,
            max_results: 100,
            company_terms: DEFAULT_COMPANY_TERMS.iter().map(|s| s.to_string()).collect(),
            academic_terms: DEFAULT_ACADEMIC_TERMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn classifier(&self) -> Classifier {
        Classifier::new(&self.company_terms, &self.academic_terms)
    }

    /// Full URL of an E-utilities endpoint, e.g. `esearch.fcgi`.
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }
}

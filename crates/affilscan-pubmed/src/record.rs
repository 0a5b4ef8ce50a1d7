//! Aggregate one fetched article into a paper row
//!
//! A row is emitted only when at least one non-collective author has a
//! company affiliation. Names keep every qualifying occurrence; companies
//! and emails are deduplicated.

use rustc_hash::FxHashSet;

use crate::author::{Resolution, resolve};
use crate::classify::Classifier;
use crate::parser::PubmedArticle;

/// Separator for multi-valued cells
pub const JOIN_SEP: &str = "; ";

/// Rendered in place of an empty company or email set
pub const NOT_AVAILABLE: &str = "N/A";

/// Publication date when neither `Year` nor `MedlineDate` is present
pub const UNKNOWN_DATE: &str = "Unknown";

/// One qualifying article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
    pub pmid: String,
    pub title: String,
    pub publication_date: String,
    /// Encounter order, duplicates kept
    pub authors: Vec<String>,
    /// First-seen order, deduplicated
    pub companies: Vec<String>,
    /// First-seen order, deduplicated
    pub emails: Vec<String>,
}

impl PaperRecord {
    pub fn authors_cell(&self) -> String {
        self.authors.join(JOIN_SEP)
    }

    pub fn companies_cell(&self) -> String {
        join_or_na(&self.companies)
    }

    pub fn emails_cell(&self) -> String {
        join_or_na(&self.emails)
    }

    /// Cells in output column order.
    pub fn cells(&self) -> [String; 6] {
        [
            self.pmid.clone(),
            self.title.clone(),
            self.publication_date.clone(),
            self.authors_cell(),
            self.companies_cell(),
            self.emails_cell(),
        ]
    }
}

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(JOIN_SEP)
    }
}

/// Required field absent from a fetched article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Pmid,
    Title,
    AuthorList,
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pmid => write!(f, "PMID"),
            Self::Title => write!(f, "ArticleTitle"),
            Self::AuthorList => write!(f, "AuthorList"),
        }
    }
}

impl std::error::Error for MissingField {}

/// Insertion-ordered set of strings.
#[derive(Default)]
struct OrderedSet {
    items: Vec<String>,
    seen: FxHashSet<String>,
}

impl OrderedSet {
    fn insert(&mut self, value: String) {
        if self.seen.insert(value.clone()) {
            self.items.push(value);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// `Year`, else `MedlineDate`, else [`UNKNOWN_DATE`].
pub fn publication_date(article: &PubmedArticle) -> String {
    article
        .pub_year
        .as_ref()
        .or(article.medline_date.as_ref())
        .cloned()
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// Turns fetched articles into paper rows using a configured classifier.
#[derive(Debug, Clone, Default)]
pub struct RecordProcessor {
    classifier: Classifier,
}

impl RecordProcessor {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Build the row for one article.
    ///
    /// `Err` means a required field is missing; `Ok(None)` means no author qualified.
    pub fn try_process(
        &self,
        article: &PubmedArticle,
    ) -> Result<Option<PaperRecord>, MissingField> {
        let pmid = article.pmid.as_ref().ok_or(MissingField::Pmid)?;
        let title = article.title.as_ref().ok_or(MissingField::Title)?;
        let author_list = article.authors.as_ref().ok_or(MissingField::AuthorList)?;

        let mut authors = Vec::new();
        let mut companies = OrderedSet::default();
        let mut emails = OrderedSet::default();

        for author in author_list.iter().filter(|a| !a.is_collective()) {
            for affiliation in &author.affiliations {
                if !self.classifier.is_company(affiliation) {
                    continue;
                }
                let resolution = resolve(author, affiliation);
                if let Resolution::Fallback { reason } = &resolution {
                    log::debug!("PMID {pmid}: {reason}");
                }
                let details = resolution.into_details();
                authors.push(details.name);
                if let Some(company) = details.company {
                    companies.insert(company);
                }
                if let Some(email) = details.email {
                    emails.insert(email);
                }
            }
        }

        if authors.is_empty() {
            return Ok(None);
        }

        Ok(Some(PaperRecord {
            pmid: pmid.clone(),
            title: title.clone(),
            publication_date: publication_date(article),
            authors,
            companies: companies.into_vec(),
            emails: emails.into_vec(),
        }))
    }

    /// Like [`try_process`](Self::try_process), logging and dropping malformed articles.
    pub fn process(&self, article: &PubmedArticle) -> Option<PaperRecord> {
        match self.try_process(article) {
            Ok(record) => record,
            Err(field) => {
                log::debug!(
                    "Skipping record {} due to missing {field}",
                    article.pmid.as_deref().unwrap_or("<no PMID>")
                );
                None
            }
        }
    }

    /// Process a batch, keeping only qualifying papers in input order.
    pub fn process_all(&self, articles: &[PubmedArticle]) -> Vec<PaperRecord> {
        articles.iter().filter_map(|a| self.process(a)).collect()
    }
}

/// Process one article with the default keyword lists.
pub fn process_article(article: &PubmedArticle) -> Option<PaperRecord> {
    RecordProcessor::default().process(article)
}

/// Process a batch with the default keyword lists.
pub fn process_records(articles: &[PubmedArticle]) -> Vec<PaperRecord> {
    RecordProcessor::default().process_all(articles)
}

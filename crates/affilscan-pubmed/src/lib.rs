//! Affilscan PubMed - find papers with company-affiliated authors
//!
//! Searches PubMed through NCBI E-utilities, parses the fetched records and
//! keeps papers where at least one author lists a non-academic affiliation.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use affilscan_pubmed::{Config, run, save_to_csv};
//!
//! let progress = Arc::new(affilscan_core::ProgressContext::new());
//! let output = run("crispr therapy", &Config::default(), &progress);
//! save_to_csv(&output.records, "papers.csv".as_ref())?;
//! ```

pub mod author;
pub mod classify;
pub mod config;
pub mod eutils;
pub mod extract;
pub mod output;
pub mod parser;
pub mod record;
pub mod runner;

// Re-exports
pub use author::{AuthorDetails, Resolution, resolve};
pub use classify::{Classifier, classify};
pub use config::Config;
pub use eutils::EutilsClient;
pub use extract::{extract_company_name, extract_email};
pub use output::{COLUMNS, save_to_csv, write_table};
pub use parser::{Author, PubmedArticle, parse_pubmed_xml};
pub use record::{PaperRecord, RecordProcessor, process_article, process_records};
pub use runner::{RunOutput, Summary, run};

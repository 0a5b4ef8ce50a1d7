//! Main runner: search → fetch → filter

use std::time::{Duration, Instant};

use affilscan_core::{SharedProgress, finish_stage, plural};

use crate::config::Config;
use crate::eutils::EutilsClient;
use crate::record::{PaperRecord, RecordProcessor};

/// Pipeline execution summary
#[derive(Debug, Default)]
pub struct Summary {
    pub ids_found: usize,
    pub articles_fetched: usize,
    pub papers_kept: usize,
    pub elapsed: Duration,
}

/// Qualifying papers plus the run summary
#[derive(Debug, Default)]
pub struct RunOutput {
    pub records: Vec<PaperRecord>,
    pub summary: Summary,
}

/// Run one query through the pipeline.
///
/// Never fails: collaborator errors show up as zero counts in the summary.
pub fn run(query: &str, config: &Config, progress: &SharedProgress) -> RunOutput {
    let start = Instant::now();
    let client = EutilsClient::new(config);
    let mut summary = Summary::default();

    let pb = progress.stage_line("search");
    pb.set_message(format!("\"{query}\""));
    let pmids = client.search(query, config.max_results);
    summary.ids_found = pmids.len();
    finish_stage(&pb, plural(pmids.len(), "id"));
    log::info!("Search \"{query}\" matched {}", plural(pmids.len(), "PMID"));

    if pmids.is_empty() {
        summary.elapsed = start.elapsed();
        return RunOutput {
            records: Vec::new(),
            summary,
        };
    }

    let pb = progress.stage_line("fetch");
    pb.set_message(format!("{} records", pmids.len()));
    let articles = client.fetch_records(&pmids);
    summary.articles_fetched = articles.len();
    finish_stage(&pb, plural(articles.len(), "article"));

    let records = RecordProcessor::new(config.classifier()).process_all(&articles);
    summary.papers_kept = records.len();
    summary.elapsed = start.elapsed();

    log::info!("=== Affiliation Scan Summary ===");
    log::info!(
        "Articles: {}/{} fetched",
        summary.articles_fetched,
        summary.ids_found
    );
    log::info!("With company authors: {}", summary.papers_kept);
    log::info!("Time: {:.1}s", summary.elapsed.as_secs_f64());

    RunOutput { records, summary }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use affilscan_core::ProgressContext;

    use super::*;

    #[test]
    fn unreachable_service_yields_empty_output() {
        let config = Config {
            base_url: "http://127.0.0.1:9/".to_string(),
            ..Default::default()
        };
        let progress = Arc::new(ProgressContext::with_tty(false));

        let output = run("cancer", &config, &progress);
        assert!(output.records.is_empty());
        assert_eq!(output.summary.ids_found, 0);
        assert_eq!(output.summary.articles_fetched, 0);
    }
}

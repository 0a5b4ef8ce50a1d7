//! affilscan - find PubMed papers with company-affiliated authors
//!
//! Searches PubMed, keeps papers where at least one author lists a
//! non-academic affiliation, and writes them as CSV or prints a table.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use comfy_table::{
    Cell, Color, ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};

use affilscan_pubmed::{COLUMNS, PaperRecord};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "affilscan")]
#[command(about = "Fetch PubMed papers with non-academic affiliations")]
#[command(version)]
struct Cli {
    /// PubMed search query
    #[arg(required_unless_present = "show_config")]
    query: Option<String>,

    /// Output CSV filename (prints a table to stdout when omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Config file path (default: ./affilscan.toml or ~/.config/affilscan/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of search results to fetch
    #[arg(short = 'n', long)]
    max_results: Option<usize>,

    /// Print the effective configuration and exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logging:
    //   TTY:     quiet (warn) unless --debug, spinners show activity
    //   non-TTY: info unless --debug
    let progress = Arc::new(affilscan_core::ProgressContext::new());
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = is_tty && !cli.debug;
    affilscan_core::init_logging(quiet, cli.debug, multi);

    let config = if let Some(path) = &cli.config {
        Config::from_file(path)?
    } else {
        Config::load()?
    };
    let pm_config = config.pubmed_config(cli.max_results);

    if cli.show_config {
        print_config(&pm_config);
        return Ok(ExitCode::SUCCESS);
    }

    let Some(query) = cli.query else {
        anyhow::bail!("a search query is required");
    };

    let output = affilscan_pubmed::run(&query, &pm_config, &progress);

    if output.summary.ids_found == 0 {
        eprintln!("No papers found");
        return Ok(ExitCode::FAILURE);
    }
    if output.records.is_empty() {
        eprintln!("No papers with company affiliations");
        return Ok(ExitCode::FAILURE);
    }

    match &cli.file {
        Some(path) => {
            affilscan_pubmed::save_to_csv(&output.records, path)?;
            println!("Saved {} records to {}", output.records.len(), path.display());
        }
        None => println!("{}", records_table(&output.records)),
    }

    Ok(ExitCode::SUCCESS)
}

/// Render papers as a table, one row per paper.
fn records_table(records: &[PaperRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(COLUMNS.iter().map(|c| Cell::new(c).fg(Color::Cyan)));
    for record in records {
        table.add_row(record.cells());
    }
    table
}

fn print_config(config: &affilscan_pubmed::Config) {
    eprintln!("\n{}", config_table(config));
}

/// Effective settings, one row each.
fn config_table(config: &affilscan_pubmed::Config) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Setting").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
        ]);

    table.add_row(vec!["E-utilities URL", &config.base_url]);
    table.add_row(vec!["Tool", &config.tool]);
    table.add_row(vec!["Email", config.email.as_deref().unwrap_or("not set")]);
    table.add_row(vec![
        "API key",
        if config.api_key.is_some() {
            "configured"
        } else {
            "not set"
        },
    ]);
    table.add_row(vec!["Max results", &config.max_results.to_string()]);

    // Terms as the classifier will match them (lower-cased, blanks dropped)
    let classifier = config.classifier();
    table.add_row(vec!["Company terms", &classifier.company_terms().join(", ")]);
    table.add_row(vec!["Academic terms", &classifier.academic_terms().join(", ")]);

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_required() {
        assert!(Cli::try_parse_from(["affilscan"]).is_err());
    }

    #[test]
    fn show_config_needs_no_query() {
        let cli = Cli::try_parse_from(["affilscan", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.query.is_none());
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from([
            "affilscan",
            "crispr",
            "-f",
            "out.csv",
            "-d",
            "-n",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.query.as_deref(), Some("crispr"));
        assert_eq!(cli.file, Some(PathBuf::from("out.csv")));
        assert!(cli.debug);
        assert_eq!(cli.max_results, Some(5));
    }

    #[test]
    fn table_has_one_row_per_record() {
        let record = PaperRecord {
            pmid: "123".to_string(),
            title: "Study X".to_string(),
            publication_date: "2021".to_string(),
            authors: vec!["Jane Doe".to_string()],
            companies: vec![],
            emails: vec!["jane@acme.com".to_string()],
        };
        let table = records_table(&[record.clone(), record]);
        assert_eq!(table.row_iter().count(), 2);
        assert_eq!(table.header().map(|h| h.cell_count()), Some(6));

        let first = table.row_iter().next().unwrap();
        let cells: Vec<String> = first.cell_iter().map(|c| c.content()).collect();
        assert_eq!(cells[3], "Jane Doe");
        assert_eq!(cells[4], "N/A");
    }

    #[test]
    fn config_table_shows_normalized_terms() {
        let config = affilscan_pubmed::Config {
            company_terms: vec!["GmbH".to_string(), " ".to_string()],
            academic_terms: vec![" Klinikum ".to_string()],
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        let table = config_table(&config);
        let rows: Vec<Vec<String>> = table
            .row_iter()
            .map(|r| r.cell_iter().map(|c| c.content()).collect())
            .collect();

        let value = |key: &str| {
            rows.iter()
                .find(|r| r[0] == key)
                .map(|r| r[1].clone())
                .unwrap()
        };
        assert_eq!(value("Company terms"), "gmbh");
        assert_eq!(value("Academic terms"), "klinikum");
        assert_eq!(value("API key"), "configured");
    }
}

//! CSV table output

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::PaperRecord;

/// Output columns, in order.
pub const COLUMNS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Write the header row and one row per record.
pub fn write_table<W: Write>(records: &[PaperRecord], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(COLUMNS).context("Failed to write CSV header")?;
    for record in records {
        csv.write_record(record.cells())
            .with_context(|| format!("Failed to write row for PMID {}", record.pmid))?;
    }
    csv.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Write records to `path`, replacing any existing file.
pub fn save_to_csv(records: &[PaperRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_table(records, std::io::BufWriter::new(file))?;
    log::debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

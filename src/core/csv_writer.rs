use crate::domain::model::{ExportOutcome, NormalizedRecord};
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Write the header row and one row per record to any sink.
pub fn write_records<W: io::Write>(records: &[NormalizedRecord], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(sink);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create or truncate `path` and write `records` to it as CSV.
///
/// An empty slice is a no-op: no file is created and an existing file is
/// left untouched. A failure part-way leaves a truncated file behind.
pub fn write_to_csv<P: AsRef<Path>>(records: &[NormalizedRecord], path: P) -> Result<ExportOutcome> {
    let path = path.as_ref();

    if records.is_empty() {
        tracing::info!("No transactions to write");
        return Ok(ExportOutcome::Skipped);
    }

    tracing::info!(
        "Writing {} transactions to {}...",
        records.len(),
        path.display()
    );

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    write_records(records, file)?;

    tracing::info!("Successfully exported to {}", path.display());
    Ok(ExportOutcome::Written {
        path: path.display().to_string(),
        rows: records.len(),
    })
}

//! Reading record collections and writing import tables

use crate::dedup::SeenSet;
use crate::error::{ExtractError, Result};
use crate::pipeline::ExtractionPipeline;
use crate::types::{Extraction, OUTPUT_HEADERS, OutputRow};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Parse a record collection
///
/// Accepts a JSON array of records, or a stream of whitespace-separated
/// JSON values such as one record per line. Empty input is an empty
/// collection. Elements are returned as-is; non-objects are left for the
/// pipeline to skip.
pub fn parse_records(content: &str) -> Result<Vec<Value>> {
    let content = content.trim_start_matches('\u{feff}').trim();

    if content.is_empty() {
        return Ok(Vec::new());
    }

    if content.starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    let records = serde_json::Deserializer::from_str(content)
        .into_iter::<Value>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Read and parse a record collection from disk
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&content)?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write rows as an import table
///
/// The header row is always written, even with no rows.
pub fn write_rows<W: Write>(writer: W, rows: &[OutputRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(OUTPUT_HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write rows as an import table at `path`, replacing any existing file
pub fn write_rows_to_path(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let file = File::create(path)?;
    write_rows(BufWriter::new(file), rows)
}

/// Run a full extraction from files
///
/// Reads records from `input`, seeds deduplication from `ledger` when
/// given, and writes the table to `output`.
pub fn run(
    pipeline: &ExtractionPipeline,
    input: &Path,
    output: &Path,
    ledger: Option<&Path>,
) -> Result<Extraction> {
    let records = load_records(input)?;
    let mut seen = ledger.map(SeenSet::load).unwrap_or_default();

    let extraction = pipeline.run(&records, &mut seen);
    write_rows_to_path(output, &extraction.rows)?;

    info!("Wrote {} rows to {}", extraction.count(), output.display());
    Ok(extraction)
}

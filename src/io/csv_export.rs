//! CSV export of the final ranking.
//!
//! One `word,count` row per ranked pair, no header row, in ranking order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::core::errors::{Result, SieveError};
use crate::core::ranking::RankedPair;

/// Write `pairs` to any writer as header-less CSV.
pub fn write_csv<W: Write>(writer: W, pairs: &[RankedPair]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for pair in pairs {
        let count = pair.count.to_string();
        csv_writer.write_record([pair.word.as_str(), count.as_str()])?;
    }

    csv_writer
        .flush()
        .map_err(|e| SieveError::io("Failed to flush CSV output", e))
}

/// Render `pairs` as a CSV string.
pub fn render_ranking(pairs: &[RankedPair]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, pairs)?;
    String::from_utf8(buffer)
        .map_err(|e| SieveError::internal(format!("CSV output is not UTF-8: {e}")))
}

/// Create (or truncate) `path` and write the ranking to it.
pub fn write_ranking(path: &Path, pairs: &[RankedPair]) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        SieveError::output(
            "Failed to create result file",
            path.display().to_string(),
            e,
        )
    })?;

    write_csv(file, pairs).map_err(|e| e.with_context(path.display().to_string()))?;
    info!("Wrote {} rows to {}", pairs.len(), path.display());
    Ok(())
}

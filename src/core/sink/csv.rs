//! CSV result sink
//!
//! Each call rewrites the whole file from the in-memory result set. Columns
//! are the canonical [`RESULT_COLUMNS`] followed by any extra fields in the
//! order they first appear.

use crate::core::atomic::write_atomic;
use crate::domain::{HarvestError, Result, ResultRow, RESULT_COLUMNS};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the output file with `results`
    ///
    /// An empty result set leaves any existing file alone.
    pub fn write_all(&self, results: &[ResultRow]) -> Result<()> {
        if results.is_empty() {
            tracing::info!(path = %self.path.display(), "No results to save");
            return Ok(());
        }

        let columns = output_columns(results);

        write_atomic(&self.path, |out| {
            let mut writer = ::csv::Writer::from_writer(out);
            writer.write_record(&columns)?;
            for row in results {
                writer.write_record(
                    columns
                        .iter()
                        .map(|column| row.column(column).unwrap_or_default()),
                )?;
            }
            writer.flush()?;
            Ok(())
        })
        .map_err(|e| match e {
            HarvestError::Sink(_) => e,
            other => HarvestError::Sink(other.to_string()),
        })?;

        tracing::info!(
            path = %self.path.display(),
            rows = results.len(),
            columns = columns.len(),
            "Saved results"
        );

        Ok(())
    }
}

/// Header row for `results`
pub fn output_columns(results: &[ResultRow]) -> Vec<String> {
    let mut columns: Vec<String> = RESULT_COLUMNS.iter().map(|c| c.to_string()).collect();
    for row in results {
        for key in row.extra.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

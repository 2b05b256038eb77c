//! Wide-format corpus summary table and CSV persistence.

use crate::summary::{DocumentSummary, AGGREGATE_COLUMNS};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing the summary table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to write summary table: {0}")]
    FileWrite(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, TableError>;

/// Corpus summary table: one row per qualifying document.
///
/// Row order follows the order summaries were added (the directory scan
/// order) and is not part of the contract; consumers key rows by the
/// `instance` label.
#[derive(Debug, Default)]
pub struct SummaryTable {
    rows: Vec<DocumentSummary>,
}

impl SummaryTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Appends one document's summary row.
    pub fn push(&mut self, summary: DocumentSummary) {
        self.rows.push(summary);
    }

    /// Number of document rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every word length observed in any row's sample, ascending.
    fn observed_lengths(&self) -> BTreeSet<usize> {
        self.rows
            .iter()
            .flat_map(|row| row.length_frequencies.keys().copied())
            .collect()
    }

    /// Renders the table as CSV.
    ///
    /// Columns are the eight aggregates followed by one `length_<v>` column
    /// per word length observed anywhere in the corpus. A document without
    /// words of some length gets frequency 0 for that column, so every row
    /// holds a value for every column.
    pub fn to_csv(&self) -> String {
        let lengths = self.observed_lengths();

        let mut csv = String::from("instance");
        for name in AGGREGATE_COLUMNS {
            csv.push(',');
            csv.push_str(name);
        }
        for length in &lengths {
            csv.push_str(&format!(",length_{length}"));
        }
        csv.push('\n');

        for row in &self.rows {
            csv.push_str(&row.instance);
            for value in row.aggregate_values() {
                csv.push_str(&format!(",{value}"));
            }
            for length in &lengths {
                let frequency = row.length_frequencies.get(length).copied().unwrap_or(0.0);
                csv.push_str(&format!(",{frequency}"));
            }
            csv.push('\n');
        }
        csv
    }

    /// Writes the table as CSV to `path`.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_csv())?;
        Ok(())
    }
}

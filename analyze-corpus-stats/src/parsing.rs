//! Loading summary tables from CSV.
//!
//! The corpus summary and the reference summary share one shape: a header
//! row naming the statistic columns, then one row per instance with the
//! instance label in the first cell.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a summary table
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Summary table is empty (no header row)")]
    MissingHeader,

    #[error("Row '{instance}' has {actual} values, expected {expected}")]
    RowWidth {
        instance: String,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to parse value '{value}' in column '{column}' of row '{instance}'")]
    BadValue {
        instance: String,
        column: String,
        value: String,
    },
}

type Result<T> = core::result::Result<T, ParsingError>;

/// A summary table: statistic columns and rows keyed by instance label.
///
/// Row order mirrors file order but carries no meaning; lookups go through
/// the instance label.
#[derive(Debug, Clone)]
pub struct SummaryTable {
    columns: Vec<String>,
    rows: Vec<(String, Vec<f64>)>,
}

impl SummaryTable {
    /// Loads a summary table from a CSV file.
    ///
    /// # Arguments
    /// * `path` - Path to the summary CSV
    ///
    /// # Returns
    /// * `Ok(SummaryTable)` - Successfully parsed table
    /// * `Err(ParsingError)` - If reading or parsing failed
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_csv(&text)
    }

    /// Parses a summary table from CSV text.
    ///
    /// The first header cell names the instance column and is not treated
    /// as a statistic; the remaining header cells are the statistic
    /// columns. Every data row must hold one value per statistic column.
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(ParsingError::MissingHeader)?;
        let columns: Vec<String> = header.split(',').skip(1).map(str::to_string).collect();

        let mut rows = Vec::new();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            let mut cells = line.split(',');
            let instance = cells.next().unwrap_or("").to_string();
            let values: Vec<&str> = cells.collect();
            if values.len() != columns.len() {
                return Err(ParsingError::RowWidth {
                    instance,
                    expected: columns.len(),
                    actual: values.len(),
                });
            }

            let mut parsed = Vec::with_capacity(values.len());
            for (column, value) in columns.iter().zip(values) {
                let number: f64 = value.trim().parse().map_err(|_| ParsingError::BadValue {
                    instance: instance.clone(),
                    column: column.clone(),
                    value: value.to_string(),
                })?;
                parsed.push(number);
            }
            rows.push((instance, parsed));
        }

        Ok(Self { columns, rows })
    }

    /// Statistic column labels, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of instance rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All row values of one statistic column, in row order.
    ///
    /// Returns `None` when the table has no such column.
    pub fn column_values(&self, statistic: &str) -> Option<Vec<f64>> {
        let index = self.columns.iter().position(|column| column == statistic)?;
        Some(self.rows.iter().map(|(_, values)| values[index]).collect())
    }

    /// The value of one statistic for one instance row.
    ///
    /// Returns `None` when either the row or the column is absent.
    pub fn value(&self, instance: &str, statistic: &str) -> Option<f64> {
        let index = self.columns.iter().position(|column| column == statistic)?;
        let (_, values) = self.rows.iter().find(|(label, _)| label == instance)?;
        Some(values[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "instance,mean,length_2\n\
                       /files/a,4.5,0.25\n\
                       /files/b,3.5,0.75\n";

    #[test]
    fn test_from_csv() {
        let table = SummaryTable::from_csv(CSV).unwrap();

        assert_eq!(table.columns(), &["mean".to_string(), "length_2".to_string()]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_column_values() {
        let table = SummaryTable::from_csv(CSV).unwrap();

        assert_eq!(table.column_values("mean"), Some(vec![4.5, 3.5]));
        assert_eq!(table.column_values("length_2"), Some(vec![0.25, 0.75]));
        assert_eq!(table.column_values("median"), None);
    }

    #[test]
    fn test_value_lookup() {
        let table = SummaryTable::from_csv(CSV).unwrap();

        assert_eq!(table.value("/files/a", "mean"), Some(4.5));
        assert_eq!(table.value("/files/b", "length_2"), Some(0.75));
        assert_eq!(table.value("/files/c", "mean"), None);
        assert_eq!(table.value("/files/a", "median"), None);
    }

    #[test]
    fn test_missing_header() {
        let result = SummaryTable::from_csv("");
        assert!(matches!(result, Err(ParsingError::MissingHeader)));
    }

    #[test]
    fn test_row_width_mismatch() {
        let result = SummaryTable::from_csv("instance,mean,std\na,1.0\n");
        assert!(matches!(
            result,
            Err(ParsingError::RowWidth {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_bad_value() {
        let result = SummaryTable::from_csv("instance,mean\na,not-a-number\n");
        assert!(matches!(result, Err(ParsingError::BadValue { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("summary.csv");
        std::fs::write(&path, CSV).unwrap();

        let table = SummaryTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);

        let missing = temp_dir.path().join("missing.csv");
        assert!(matches!(
            SummaryTable::load(&missing),
            Err(ParsingError::FileRead(_))
        ));
    }
}

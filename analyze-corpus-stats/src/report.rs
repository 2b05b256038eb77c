//! Empirical p-values and the comparison report.
//!
//! For every statistic the reference table carries, the report holds the
//! corpus-wide mean, the reference value, and the one-sided left-tail
//! empirical p-value of the reference value within the corpus
//! distribution.

use crate::parsing::SummaryTable;
use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};
use thiserror::Error;

/// Errors that can occur while building or writing the report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Reference table has no row labeled '{0}'")]
    MissingReferenceRow(String),

    #[error("Corpus table has no column for statistic '{0}'")]
    MissingStatistic(String),

    #[error("Cannot compute an empirical p-value over an empty distribution")]
    EmptyDistribution,

    #[error("Failed to write report: {0}")]
    FileWrite(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, ReportError>;

/// One report row: a statistic compared between corpus and reference
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct ReportRow {
    /// Statistic column label
    #[tabled(rename = "statistic")]
    pub statistic: String,
    /// Corpus-wide mean of the statistic
    #[tabled(rename = "project_runeberg_average")]
    pub corpus_average: f64,
    /// The reference row's value of the statistic
    #[tabled(rename = "liber_primus_value")]
    pub reference_value: f64,
    /// One-sided left-tail empirical p-value
    #[tabled(rename = "one_sided_left_p_value")]
    pub p_value: f64,
}

/// Fraction of distribution values that are less than or equal to `value`.
///
/// This is a one-sided left-tail empirical p-value: how low `value` sits
/// relative to the distribution.
///
/// # Arguments
/// * `distribution` - Per-document values of one statistic
/// * `value` - The reference value to rank within the distribution
///
/// # Returns
/// * `Ok(p)` - p in [0, 1]
/// * `Err(ReportError::EmptyDistribution)` - If the distribution holds no values
pub fn empirical_p_value(distribution: &[f64], value: f64) -> Result<f64> {
    if distribution.is_empty() {
        return Err(ReportError::EmptyDistribution);
    }
    let at_or_below = distribution.iter().filter(|&&v| v <= value).count();
    Ok(at_or_below as f64 / distribution.len() as f64)
}

/// Builds one report row per statistic column of the reference table.
///
/// All three values per row are rounded to 3 decimal places.
///
/// # Arguments
/// * `corpus` - The corpus summary table
/// * `reference` - The reference summary table
/// * `reference_label` - Label of the reference table's summary row
///
/// # Returns
/// * `Ok(rows)` - One row per reference statistic column
/// * `Err(ReportError)` - If a lookup fails or the corpus is empty
pub fn build_report(
    corpus: &SummaryTable,
    reference: &SummaryTable,
    reference_label: &str,
) -> Result<Vec<ReportRow>> {
    let mut rows = Vec::with_capacity(reference.columns().len());
    for statistic in reference.columns() {
        let reference_value = reference
            .value(reference_label, statistic)
            .ok_or_else(|| ReportError::MissingReferenceRow(reference_label.to_string()))?;
        let distribution = corpus
            .column_values(statistic)
            .ok_or_else(|| ReportError::MissingStatistic(statistic.clone()))?;
        let p_value = empirical_p_value(&distribution, reference_value)?;
        let corpus_average = distribution.iter().sum::<f64>() / distribution.len() as f64;

        rows.push(ReportRow {
            statistic: statistic.clone(),
            corpus_average: round3(corpus_average),
            reference_value: round3(reference_value),
            p_value: round3(p_value),
        });
    }
    Ok(rows)
}

/// Renders report rows as an ASCII console table.
pub fn format_report_table(rows: &[ReportRow]) -> String {
    Table::new(rows).to_string()
}

/// Writes the report as a tab-separated file.
///
/// # Arguments
/// * `rows` - Report rows from [`build_report`]
/// * `path` - Destination of the TSV file
pub fn write_report_tsv(rows: &[ReportRow], path: &Path) -> Result<()> {
    let mut tsv = String::from(
        "statistic\tproject_runeberg_average\tliber_primus_value\tone_sided_left_p_value\n",
    );
    for row in rows {
        tsv.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            row.statistic, row.corpus_average, row.reference_value, row.p_value
        ));
    }
    fs::write(path, tsv)?;
    Ok(())
}

/// Rounds to 3 decimal places.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

//! Per-document summary statistics over a word-length sample.

use std::collections::BTreeMap;

/// Aggregate statistic column labels, in summary-table order
pub const AGGREGATE_COLUMNS: [&str; 8] = [
    "mean",
    "std",
    "median",
    "var",
    "min",
    "max",
    "percentile_75",
    "percentile_25",
];

/// Summary statistics of one document's word-length sample.
///
/// Categorical frequencies are kept as a map from exact length to
/// proportion; the wide table with one `length_<v>` column per observed
/// length is only materialized when the whole corpus is merged.
#[derive(Debug, Clone)]
pub struct DocumentSummary {
    /// Document identifier labeling the summary row
    pub instance: String,
    /// Arithmetic mean of the sampled lengths
    pub mean: f64,
    /// Sample standard deviation (N-1 denominator)
    pub std: f64,
    /// Median of the sampled lengths
    pub median: f64,
    /// Sample variance (N-1 denominator)
    pub var: f64,
    /// Shortest sampled length
    pub min: f64,
    /// Longest sampled length
    pub max: f64,
    /// 75th percentile of the sampled lengths
    pub percentile_75: f64,
    /// 25th percentile of the sampled lengths
    pub percentile_25: f64,
    /// Proportion of sampled words per exact length, keyed by length value
    pub length_frequencies: BTreeMap<usize, f64>,
}

impl DocumentSummary {
    /// Computes the summary of one length sample.
    ///
    /// Percentiles (including the median) use linear interpolation between
    /// ranks; standard deviation and variance use the N-1 denominator.
    ///
    /// # Arguments
    /// * `instance` - Document identifier for the summary row
    /// * `sample` - The document's full fixed-size word-length sample
    ///
    /// # Panics
    /// Panics if `sample` is empty.
    pub fn from_sample(instance: String, sample: &[usize]) -> Self {
        assert!(!sample.is_empty(), "sample must not be empty");

        let n = sample.len();
        let mut sorted: Vec<f64> = sample.iter().map(|&length| length as f64).collect();
        sorted.sort_by(f64::total_cmp);

        let mean = sorted.iter().sum::<f64>() / n as f64;
        let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0);

        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for &length in sample {
            *counts.entry(length).or_insert(0) += 1;
        }
        let length_frequencies = counts
            .into_iter()
            .map(|(length, count)| (length, count as f64 / n as f64))
            .collect();

        Self {
            instance,
            mean,
            std: var.sqrt(),
            median: percentile(&sorted, 0.5),
            var,
            min: sorted[0],
            max: sorted[n - 1],
            percentile_75: percentile(&sorted, 0.75),
            percentile_25: percentile(&sorted, 0.25),
            length_frequencies,
        }
    }

    /// Aggregate values in [`AGGREGATE_COLUMNS`] order.
    pub fn aggregate_values(&self) -> [f64; 8] {
        [
            self.mean,
            self.std,
            self.median,
            self.var,
            self.min,
            self.max,
            self.percentile_75,
            self.percentile_25,
        ]
    }
}

/// Computes the `q`-quantile of pre-sorted values by linear interpolation
/// between ranks.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    let fraction = rank - low as f64;
    sorted[low] + (sorted[high] - sorted[low]) * fraction
}

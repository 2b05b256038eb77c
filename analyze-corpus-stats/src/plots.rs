//! Histogram plotting for corpus statistic distributions
//!
//! This module renders the corpus distribution of one statistic as a
//! histogram using the [`plotters`] crate, with vertical markers at the
//! reference value and the corpus mean. Charts are saved as PNG files
//! with fixed 1200x800 resolution.

use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Number of equal-width histogram bins across the corpus distribution
const HISTOGRAM_BINS: usize = 30;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Creates a histogram of one statistic's corpus distribution and saves it
/// as a PNG file
///
/// Vertical marker lines are drawn at the reference value (red) and at the
/// corpus mean (black). The X range is widened when a marker falls outside
/// the data range so both markers stay visible.
///
/// # Arguments
/// * `values` - Per-document values of the statistic
/// * `reference_value` - The reference dataset's value of the statistic
/// * `corpus_mean` - Corpus-wide mean of the statistic
/// * `statistic` - Statistic label, used in the chart title and X-axis label
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Chart Properties
/// * Resolution: 1200x800 pixels
/// * Format: PNG
/// * Y-axis: document count per bin
/// * X-axis: statistic value
/// * Font rendering: Uses bitmap backend's default fonts (works in headless environments)
pub fn create_statistic_histogram(
    values: &[f64],
    reference_value: f64,
    corpus_mean: f64,
    statistic: &str,
    output_path: &Path,
) -> Result<()> {
    if values.is_empty() {
        return Err(PlotError::InvalidData("Values cannot be empty".to_string()));
    }

    let (bins, bin_width, x_min) = bin_values(values);
    let max_count = bins.iter().copied().max().unwrap_or(0);

    let x_max = x_min + bin_width * HISTOGRAM_BINS as f64;
    let x_range_min = x_min.min(reference_value);
    let x_range_max = x_max.max(reference_value);
    // Headroom above the tallest bin
    let y_max = (max_count as f64 * 1.1).max(1.0);

    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let title = format!("Distribution of {statistic} in Project Runeberg (red line: Liber Primus)");
    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(&title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_range_min..x_range_max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc(statistic)
        .x_label_style(("sans-serif", 25))
        .y_desc("Documents")
        .y_label_style(("sans-serif", 25))
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Histogram bars
    chart_context
        .draw_series(bins.iter().enumerate().map(|(index, &count)| {
            let left = x_min + bin_width * index as f64;
            let right = left + bin_width;
            Rectangle::new([(left, 0.0), (right, count as f64)], BLUE.mix(0.5).filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Marker lines: reference value in red, corpus mean in black
    chart_context
        .draw_series(LineSeries::new(
            vec![(reference_value, 0.0), (reference_value, y_max)],
            &RED,
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart_context
        .draw_series(LineSeries::new(
            vec![(corpus_mean, 0.0), (corpus_mean, y_max)],
            &BLACK,
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Buckets values into [`HISTOGRAM_BINS`] equal-width bins over [min, max]
///
/// # Arguments
/// * `values` - Values to bucket; must be non-empty
///
/// # Returns
/// Per-bin counts, the bin width, and the lower bound of the first bin
fn bin_values(values: &[f64]) -> (Vec<u64>, f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Degenerate distribution: one nominal-width bin catches everything
    let width = if max > min {
        (max - min) / HISTOGRAM_BINS as f64
    } else {
        1.0
    };

    let mut bins = vec![0u64; HISTOGRAM_BINS];
    for &value in values {
        let index = (((value - min) / width) as usize).min(HISTOGRAM_BINS - 1);
        bins[index] += 1;
    }
    (bins, width, min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bin_values_counts_extremes() {
        let (bins, width, x_min) = bin_values(&[0.0, 30.0]);

        assert_eq!(x_min, 0.0);
        assert_eq!(width, 1.0);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins[0], 1);
        assert_eq!(bins[HISTOGRAM_BINS - 1], 1);
        assert_eq!(bins.iter().sum::<u64>(), 2);
    }

    #[test]
    fn test_bin_values_total_matches_input() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let (bins, _, _) = bin_values(&values);

        assert_eq!(bins.iter().sum::<u64>(), 100);
    }

    #[test]
    fn test_bin_values_degenerate_distribution() {
        let (bins, width, x_min) = bin_values(&[2.5, 2.5, 2.5]);

        assert_eq!(x_min, 2.5);
        assert_eq!(width, 1.0);
        assert_eq!(bins[0], 3);
        assert_eq!(bins.iter().sum::<u64>(), 3);
    }

    #[test]
    fn test_create_statistic_histogram_validation() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test_histogram.png");

        let result = create_statistic_histogram(&[], 1.0, 1.0, "mean", &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_statistic_histogram_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test_histogram.png");

        let values: Vec<f64> = (0..50).map(|v| f64::from(v) / 10.0).collect();
        let result = create_statistic_histogram(&values, 1.5, 2.45, "mean", &output_path);

        assert!(result.is_ok());
        assert!(output_path.exists());
    }
}

mod config;
mod parsing;
mod plots;
mod report;

use config::{AnalyzeConfig, ReferenceVariant};
use parsing::SummaryTable;
use thiserror::Error;

/// Errors that can occur during the comparator run
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Parsing error: {0}")]
    Parsing(#[from] parsing::ParsingError),

    #[error("Report error: {0}")]
    Report(#[from] report::ReportError),

    #[error("Plot error: {0}")]
    Plot(#[from] plots::PlotError),
}

type Result<T> = core::result::Result<T, AnalysisError>;

fn main() -> Result<()> {
    let variant = ReferenceVariant::from_env()?;
    let config = AnalyzeConfig::from_home_env(variant)?;

    // Check both input tables exist before doing any work
    if !config.corpus_summary_path.exists() {
        eprintln!(
            "Error: Corpus summary does not exist: {}",
            config.corpus_summary_path.display()
        );
        std::process::exit(1);
    }
    if !config.reference_summary_path.exists() {
        eprintln!(
            "Error: Reference summary does not exist: {}",
            config.reference_summary_path.display()
        );
        std::process::exit(1);
    }

    let corpus = SummaryTable::load(&config.corpus_summary_path)?;
    let reference = SummaryTable::load(&config.reference_summary_path)?;
    println!(
        "Loaded {} corpus documents and {} reference statistics",
        corpus.len(),
        reference.columns().len()
    );

    // P-value report: console table plus TSV file
    let rows = report::build_report(&corpus, &reference, &config.reference_label)?;
    println!("{}", report::format_report_table(&rows));

    report::write_report_tsv(&rows, &config.report_path)?;
    println!("Report saved to: {}", config.report_path.display());

    // Histogram plots with reference markers
    generate_statistic_plots(&config, &corpus, &reference)?;

    Ok(())
}

/// Renders one histogram per configured statistic.
///
/// Statistics absent from the reference table are skipped with a warning;
/// a statistic missing from the corpus table is an error, matching the
/// report's lookup rules.
fn generate_statistic_plots(
    config: &AnalyzeConfig,
    corpus: &SummaryTable,
    reference: &SummaryTable,
) -> Result<()> {
    for statistic in &config.plot_statistics {
        let Some(reference_value) = reference.value(&config.reference_label, statistic) else {
            eprintln!("Warning: statistic '{statistic}' not in the reference table, skipping plot");
            continue;
        };
        let distribution = corpus
            .column_values(statistic)
            .ok_or_else(|| report::ReportError::MissingStatistic(statistic.clone()))?;
        let corpus_mean = distribution.iter().sum::<f64>() / distribution.len() as f64;

        let output_path = config.plot_dir.join(format!("{statistic}_histogram.png"));
        plots::create_statistic_histogram(
            &distribution,
            reference_value,
            corpus_mean,
            statistic,
            &output_path,
        )?;
        println!("Plot saved to: {}", output_path.display());
    }
    Ok(())
}

//! Run configuration for the statistical comparator.

use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while building the run configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("HOME environment variable is not set")]
    MissingHome,

    #[error("Unknown reference variant '{0}' (expected 'solved' or 'unsolved')")]
    UnknownVariant(String),
}

type Result<T> = core::result::Result<T, ConfigError>;

/// Reference dataset variant the corpus is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceVariant {
    Unsolved,
    Solved,
}

impl ReferenceVariant {
    /// Row label of the reference table's single summary row.
    pub fn label(self) -> &'static str {
        match self {
            ReferenceVariant::Unsolved => "unsolved",
            ReferenceVariant::Solved => "solved",
        }
    }

    /// File name of the reference summary table.
    pub fn summary_file(self) -> &'static str {
        match self {
            ReferenceVariant::Unsolved => "unsolved_summary.csv",
            ReferenceVariant::Solved => "solved_summary.csv",
        }
    }

    /// Parses a variant name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "unsolved" => Some(ReferenceVariant::Unsolved),
            "solved" => Some(ReferenceVariant::Solved),
            _ => None,
        }
    }

    /// Reads the variant from the `LP_VARIANT` environment variable,
    /// defaulting to unsolved when unset.
    pub fn from_env() -> Result<Self> {
        match env::var("LP_VARIANT") {
            Ok(name) => Self::from_name(&name).ok_or(ConfigError::UnknownVariant(name)),
            Err(_) => Ok(ReferenceVariant::Unsolved),
        }
    }
}

/// Configuration for one comparator run
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Corpus summary table produced by make-corpus-stats
    pub corpus_summary_path: PathBuf,
    /// Externally produced reference summary table
    pub reference_summary_path: PathBuf,
    /// Row label of the reference summary row
    pub reference_label: String,
    /// Destination of the p-value report
    pub report_path: PathBuf,
    /// Directory receiving histogram plots
    pub plot_dir: PathBuf,
    /// Statistics to render as histograms
    pub plot_statistics: Vec<String>,
}

impl AnalyzeConfig {
    /// Builds the configuration for `variant` with paths rooted at `home`.
    ///
    /// The report and the plots land in the working directory.
    pub fn with_home(home: &Path, variant: ReferenceVariant) -> Self {
        Self {
            corpus_summary_path: home
                .join("lp_experiments/datasets_large/project_gut_summary.csv"),
            reference_summary_path: home.join("lp_inference/data").join(variant.summary_file()),
            reference_label: variant.label().to_string(),
            report_path: PathBuf::from("p_values_three.tsv"),
            plot_dir: PathBuf::from("."),
            plot_statistics: vec!["length_2".to_string()],
        }
    }

    /// Builds the configuration from the `HOME` environment variable.
    ///
    /// # Returns
    /// * `Ok(AnalyzeConfig)` - Paths rooted at the user's home directory
    /// * `Err(ConfigError)` - If `HOME` is not set
    pub fn from_home_env(variant: ReferenceVariant) -> Result<Self> {
        let home = env::var("HOME").map_err(|_| ConfigError::MissingHome)?;
        Ok(Self::with_home(Path::new(&home), variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_labels_and_files() {
        assert_eq!(ReferenceVariant::Unsolved.label(), "unsolved");
        assert_eq!(ReferenceVariant::Solved.label(), "solved");
        assert_eq!(
            ReferenceVariant::Unsolved.summary_file(),
            "unsolved_summary.csv"
        );
        assert_eq!(ReferenceVariant::Solved.summary_file(), "solved_summary.csv");
    }

    #[test]
    fn test_variant_from_name() {
        assert_eq!(
            ReferenceVariant::from_name("unsolved"),
            Some(ReferenceVariant::Unsolved)
        );
        assert_eq!(
            ReferenceVariant::from_name("solved"),
            Some(ReferenceVariant::Solved)
        );
        assert_eq!(ReferenceVariant::from_name("other"), None);
    }

    #[test]
    fn test_with_home_paths() {
        let config = AnalyzeConfig::with_home(Path::new("/home/analyst"), ReferenceVariant::Unsolved);

        assert_eq!(
            config.corpus_summary_path,
            PathBuf::from("/home/analyst/lp_experiments/datasets_large/project_gut_summary.csv")
        );
        assert_eq!(
            config.reference_summary_path,
            PathBuf::from("/home/analyst/lp_inference/data/unsolved_summary.csv")
        );
        assert_eq!(config.reference_label, "unsolved");
        assert_eq!(config.plot_statistics, vec!["length_2".to_string()]);
    }

    #[test]
    fn test_with_home_solved_variant() {
        let config = AnalyzeConfig::with_home(Path::new("/home/analyst"), ReferenceVariant::Solved);

        assert_eq!(
            config.reference_summary_path,
            PathBuf::from("/home/analyst/lp_inference/data/solved_summary.csv")
        );
        assert_eq!(config.reference_label, "solved");
    }
}

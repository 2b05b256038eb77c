//! Run configuration for the corpus summarizer.
//!
//! Paths follow the layout of the original experiment: the corpus and all
//! derived datasets live under the user's home directory.

use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while building the run configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("HOME environment variable is not set")]
    MissingHome,

    #[error("Unknown corpus variant '{0}' (expected 'solved' or 'unsolved')")]
    UnknownVariant(String),
}

type Result<T> = core::result::Result<T, ConfigError>;

/// Corpus variant being characterized.
///
/// The variants differ only in how many leading words each document must
/// contribute to its length sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusVariant {
    /// Paired with the unsolved reference dataset.
    Unsolved,
    /// Paired with the solved reference dataset.
    Solved,
}

impl CorpusVariant {
    /// Number of leading word lengths sampled per document.
    pub fn sample_size(self) -> usize {
        match self {
            CorpusVariant::Unsolved => 2902,
            CorpusVariant::Solved => 728,
        }
    }

    /// Parses a variant name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "unsolved" => Some(CorpusVariant::Unsolved),
            "solved" => Some(CorpusVariant::Solved),
            _ => None,
        }
    }

    /// Reads the variant from the `LP_VARIANT` environment variable,
    /// defaulting to unsolved when unset.
    pub fn from_env() -> Result<Self> {
        match env::var("LP_VARIANT") {
            Ok(name) => Self::from_name(&name).ok_or(ConfigError::UnknownVariant(name)),
            Err(_) => Ok(CorpusVariant::Unsolved),
        }
    }
}

/// Configuration for one summarizer run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory holding one text file per corpus document
    pub corpus_dir: PathBuf,
    /// Number of leading word lengths sampled per document
    pub sample_size: usize,
    /// Destination of the corpus summary table
    pub output_path: PathBuf,
}

impl RunConfig {
    /// Builds the configuration for `variant` with paths rooted at `home`.
    pub fn with_home(home: &Path, variant: CorpusVariant) -> Self {
        Self {
            corpus_dir: home.join("project-runeberg/files"),
            sample_size: variant.sample_size(),
            output_path: home.join("lp_experiments/datasets_large/project_gut_summary.csv"),
        }
    }

    /// Builds the configuration from the `HOME` environment variable.
    ///
    /// # Returns
    /// * `Ok(RunConfig)` - Paths rooted at the user's home directory
    /// * `Err(ConfigError)` - If `HOME` is not set
    pub fn from_home_env(variant: CorpusVariant) -> Result<Self> {
        let home = env::var("HOME").map_err(|_| ConfigError::MissingHome)?;
        Ok(Self::with_home(Path::new(&home), variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_sample_sizes() {
        assert_eq!(CorpusVariant::Unsolved.sample_size(), 2902);
        assert_eq!(CorpusVariant::Solved.sample_size(), 728);
    }

    #[test]
    fn test_variant_from_name() {
        assert_eq!(CorpusVariant::from_name("unsolved"), Some(CorpusVariant::Unsolved));
        assert_eq!(CorpusVariant::from_name("solved"), Some(CorpusVariant::Solved));
        assert_eq!(CorpusVariant::from_name("other"), None);
    }

    #[test]
    fn test_with_home_paths() {
        let config = RunConfig::with_home(Path::new("/home/analyst"), CorpusVariant::Unsolved);

        assert_eq!(
            config.corpus_dir,
            PathBuf::from("/home/analyst/project-runeberg/files")
        );
        assert_eq!(config.sample_size, 2902);
        assert_eq!(
            config.output_path,
            PathBuf::from("/home/analyst/lp_experiments/datasets_large/project_gut_summary.csv")
        );
    }
}

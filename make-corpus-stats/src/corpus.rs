//! Corpus scanning and aggregation into the summary table.

use crate::config::RunConfig;
use crate::sampler::{self, SamplerError};
use crate::summary::DocumentSummary;
use crate::table::SummaryTable;
use indicatif::ProgressBar;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while summarizing the corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read corpus directory: {0}")]
    DirectoryRead(#[from] std::io::Error),

    #[error("Failed to sample document '{path}': {source}")]
    Sample {
        path: String,
        #[source]
        source: SamplerError,
    },
}

type Result<T> = core::result::Result<T, CorpusError>;

/// Outcome of one corpus scan
#[derive(Debug)]
pub struct CorpusScan {
    /// One summary row per qualifying document
    pub table: SummaryTable,
    /// Number of directory entries visited
    pub documents_scanned: usize,
    /// Number of documents skipped for holding too few words
    pub documents_skipped: usize,
}

/// Samples and summarizes every document in the corpus directory.
///
/// Every directory entry is treated as one document (no recursion, no
/// extension filtering). Documents with fewer than `sample_size` words are
/// skipped; any unreadable entry aborts the scan.
///
/// # Arguments
/// * `config` - Corpus directory and sample size for the run
///
/// # Returns
/// * `Ok(CorpusScan)` - The summary table plus scan counters
/// * `Err(CorpusError)` - If the directory or any document could not be read
pub fn summarize_corpus(config: &RunConfig) -> Result<CorpusScan> {
    let entries = fs::read_dir(&config.corpus_dir)?.collect::<std::io::Result<Vec<_>>>()?;

    let progress = ProgressBar::new(entries.len() as u64);
    let mut table = SummaryTable::new();
    let mut documents_skipped = 0;

    for entry in &entries {
        let path = entry.path();
        let sample = sampler::sample_document(&path, config.sample_size).map_err(|source| {
            CorpusError::Sample {
                path: path.display().to_string(),
                source,
            }
        })?;

        match sample {
            Some(lengths) => {
                table.push(DocumentSummary::from_sample(instance_label(&path), &lengths));
            }
            None => documents_skipped += 1,
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(CorpusScan {
        table,
        documents_scanned: entries.len(),
        documents_skipped,
    })
}

/// Derives the document identifier from its path: the path string
/// truncated at the first `.`.
fn instance_label(path: &Path) -> String {
    let path = path.to_string_lossy();
    match path.split_once('.') {
        Some((prefix, _)) => prefix.to_string(),
        None => path.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn scan_config(corpus_dir: PathBuf, sample_size: usize) -> RunConfig {
        RunConfig {
            corpus_dir,
            sample_size,
            output_path: PathBuf::from("unused.csv"),
        }
    }

    #[test]
    fn test_instance_label_truncates_at_first_dot() {
        assert_eq!(
            instance_label(Path::new("/corpus/files/doc1.txt")),
            "/corpus/files/doc1"
        );
        assert_eq!(
            instance_label(Path::new("/corpus/files/doc1.tar.gz")),
            "/corpus/files/doc1"
        );
        assert_eq!(
            instance_label(Path::new("/corpus/files/doc1")),
            "/corpus/files/doc1"
        );
    }

    #[test]
    fn test_summarize_corpus_skips_short_documents() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("long"), "one two three four five").unwrap();
        fs::write(temp_dir.path().join("short"), "one two").unwrap();
        fs::write(temp_dir.path().join("exact"), "one two three").unwrap();

        let scan = summarize_corpus(&scan_config(temp_dir.path().to_path_buf(), 3)).unwrap();

        assert_eq!(scan.documents_scanned, 3);
        assert_eq!(scan.documents_skipped, 1);
        assert_eq!(scan.table.len(), 2);
    }

    #[test]
    fn test_summarize_corpus_missing_directory_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-dir");

        let result = summarize_corpus(&scan_config(missing, 3));
        assert!(matches!(result, Err(CorpusError::DirectoryRead(_))));
    }

    #[test]
    fn test_summarize_corpus_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let scan = summarize_corpus(&scan_config(temp_dir.path().to_path_buf(), 3)).unwrap();
        assert_eq!(scan.documents_scanned, 0);
        assert!(scan.table.is_empty());
    }
}

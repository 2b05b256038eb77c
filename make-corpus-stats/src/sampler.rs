//! Word-length sampling for a single document.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while sampling a document
#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("Failed to read document: {0}")]
    FileRead(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, SamplerError>;

/// Reads a document and samples the lengths of its first `sample_size` words.
///
/// Returns `Ok(None)` when the document holds fewer than `sample_size`
/// words; such documents are disqualified and contribute no summary row.
///
/// # Arguments
/// * `path` - Path of the document to read
/// * `sample_size` - Required number of leading word lengths
///
/// # Returns
/// * `Ok(Some(lengths))` - Exactly `sample_size` word lengths in document order
/// * `Ok(None)` - The document is too short to qualify
/// * `Err(SamplerError)` - If the file could not be read
pub fn sample_document(path: &Path, sample_size: usize) -> Result<Option<Vec<usize>>> {
    let text = fs::read_to_string(path)?;
    Ok(sample_text(&text, sample_size))
}

/// Samples the leading `sample_size` word lengths from raw text.
///
/// Words are delimited by whitespace, so zero-length tokens never enter
/// the sample. Lengths are counted in characters.
// The window always starts at the first word; a shifted start index was
// considered for the experiment but never adopted.
pub fn sample_text(text: &str, sample_size: usize) -> Option<Vec<usize>> {
    let lengths: Vec<usize> = text
        .split_whitespace()
        .take(sample_size)
        .map(|word| word.chars().count())
        .collect();

    if lengths.len() < sample_size {
        return None;
    }
    Some(lengths)
}

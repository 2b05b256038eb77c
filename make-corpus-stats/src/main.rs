// main.rs
mod config;
mod corpus;
mod sampler;
mod summary;
mod table;

use config::{CorpusVariant, RunConfig};
use thiserror::Error;

/// Errors that can occur during the summarizer run
#[derive(Error, Debug)]
pub enum MakeStatsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Corpus error: {0}")]
    Corpus(#[from] corpus::CorpusError),

    #[error("Output error: {0}")]
    Table(#[from] table::TableError),
}

type Result<T> = core::result::Result<T, MakeStatsError>;

fn main() -> Result<()> {
    println!("Starting corpus word-length statistics pipeline...");

    let variant = CorpusVariant::from_env()?;
    let config = RunConfig::from_home_env(variant)?;
    println!("📂 Corpus directory: {}", config.corpus_dir.display());
    println!("🔄 Sampling {} leading words per document", config.sample_size);

    // Check the corpus directory exists before doing any work
    if !config.corpus_dir.is_dir() {
        eprintln!(
            "Error: Corpus directory does not exist: {}",
            config.corpus_dir.display()
        );
        std::process::exit(1);
    }

    let scan = corpus::summarize_corpus(&config)?;

    println!("\n💾 Saving summary table...");
    scan.table.write_csv(&config.output_path)?;

    println!("\n🎉 Pipeline complete!");
    println!("📊 Final Statistics:");
    println!("   ✅ Documents summarized: {}", scan.table.len());
    println!(
        "   ⚠️ Documents skipped (too short): {}",
        scan.documents_skipped
    );
    println!("   📁 Documents scanned: {}", scan.documents_scanned);
    println!("   📂 Summary saved to: {}", config.output_path.display());

    Ok(())
}

//! Command-line interface for the Khmer extractive summarizer.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use khmer_textrank::{tokenize, StopwordFilter, Summarizer};

/// Extractive Khmer text summarizer.
///
/// Reads a document, ranks its sentences on a similarity graph, and prints
/// the most central ones.
#[derive(Debug, Parser)]
#[command(name = "khmer-textrank", version, about)]
struct Cli {
    /// File input
    #[arg(short, long)]
    file: PathBuf,

    /// Number of sentences in the summary
    #[arg(short, long, default_value_t = 2)]
    line: usize,

    /// Filter stopwords for the given language (e.g. "km") before scoring
    #[arg(long, value_name = "LANG")]
    stopwords: Option<String>,

    /// Emit the summary and per-sentence scores as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let sentences = tokenize(&text);

    let mut summarizer = Summarizer::new();
    if let Some(lang) = &cli.stopwords {
        summarizer = summarizer.with_stopwords(StopwordFilter::for_language(lang));
    }

    let summary = summarizer
        .summarize(&sentences, cli.line)
        .with_context(|| format!("failed to summarize {}", cli.file.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.text);
    }

    Ok(())
}

//! # Comment Contacts CLI
//!
//! Extracts email addresses from a comment export and writes an
//! import-ready contact table.

use anyhow::{Context, Result};
use clap::Parser;
use comment_contacts::{ExtractConfig, ExtractionPipeline, run};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Extracts email addresses from social-media comment exports.",
    long_about = "Reads comment records (a JSON array or one JSON object per line), recovers obfuscated email addresses, drops addresses already present in an optional contact ledger CSV, and writes an import-ready CSV."
)]
struct AppArgs {
    /// Comment records: a JSON array or line-delimited JSON.
    input: PathBuf,

    /// Output CSV path.
    #[arg(default_value = ExtractConfig::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Previously exported contacts CSV; addresses listed there are skipped.
    ledger: Option<PathBuf>,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Setting up tracing subscriber failed")?;

    let args = AppArgs::parse();
    tracing::debug!("Parsed CLI arguments: {:?}", args);

    let pipeline = ExtractionPipeline::new(ExtractConfig::default());
    let extraction = run(&pipeline, &args.input, &args.output, args.ledger.as_deref())
        .with_context(|| format!("Extraction from {} failed", args.input.display()))?;

    println!(
        "Extracted {} unique emails → {}",
        extraction.count(),
        args.output.display()
    );
    Ok(())
}

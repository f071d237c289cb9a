use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pagewords_core::{ScanConfig, scan_pages, write_reports};
use tracing::{debug, info};

mod cli;

use cli::Cli;

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("Parsed CLI args: {:?}", cli);

    let pages = cli.pages_dir();
    println!("{}", pages.display());

    let config = ScanConfig {
        long_token_threshold: cli.long_token_threshold,
    };
    let summary = scan_pages(&pages, &config)
        .with_context(|| format!("Failed to scan pages in {}", pages.display()))?;
    info!(
        indexed = summary.indexed,
        skipped = summary.skipped,
        failed = summary.failed,
        "Scan complete"
    );

    println!("Number of different item types:\t{}", summary.tally.items.len());
    println!("Number of different words:\t{}", summary.tally.words.len());

    let written = write_reports(&summary.tally, &cli.out_dir)
        .with_context(|| format!("Failed to write reports to {}", cli.out_dir.display()))?;
    debug!(?written, "Reports written");

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

// src/bin/npca.rs
use std::io::Write;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use npca_core::annotate::TsvAnnotator;
use npca_core::batch::BatchRunner;
use npca_core::config::Config;
use npca_core::corpus::Corpus;
use npca_core::report::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "npca", version, about = "Noun phrase complexity analyzer")]
struct Cli {
    /// Folder of annotated documents (one file per document)
    input: PathBuf,

    /// Output report path
    #[arg(long, short, default_value = "npca_results.csv")]
    output: PathBuf,

    /// Report only these stages (repeatable); default is all four
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(2..=5))]
    stages: Vec<u8>,

    /// Report raw counts only
    #[arg(long, conflicts_with = "normed_only")]
    raw_only: bool,

    /// Report normalized frequencies only
    #[arg(long, conflicts_with = "raw_only")]
    normed_only: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Print per-document progress to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    let corpus = Corpus::discover(&cli.input)?;
    let runner = BatchRunner::new(&TsvAnnotator, &config);
    let batch = runner.run_with_progress(&corpus, &|percent| {
        if config.verbose {
            eprint!("\r{percent:>3}%");
            let _ = std::io::stderr().flush();
        }
    })?;
    if config.verbose {
        eprintln!();
    }

    report::write(&batch, cli.format, &cli.output)?;
    println!(
        "{} {} documents -> {}",
        "done:".green().bold(),
        batch.rows.len(),
        cli.output.display()
    );
    Ok(())
}

/// CLI flags are applied on top of the `npca.toml` overlay.
fn build_config(cli: &Cli) -> Config {
    let mut config = Config::load();
    config.verbose = cli.verbose;

    if !cli.stages.is_empty() {
        config.metrics.stage2 = cli.stages.contains(&2);
        config.metrics.stage3 = cli.stages.contains(&3);
        config.metrics.stage4 = cli.stages.contains(&4);
        config.metrics.stage5 = cli.stages.contains(&5);
    }
    if cli.raw_only {
        config.metrics.raw = true;
        config.metrics.normed = false;
    }
    if cli.normed_only {
        config.metrics.raw = false;
        config.metrics.normed = true;
    }
    config
}

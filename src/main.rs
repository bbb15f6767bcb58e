use anyhow::Result;
use clap::Parser;
use colored::*;
use std::io;
use std::path::PathBuf;

use fittrack::{logging, run_batch, AppConfig, OutputFormat, TrackerError};

/// fittrack - Workout summary calculator
///
/// Converts raw sensor packages into distance, mean speed and calories
/// burned for running, sports walking and swimming sessions.
#[derive(Parser)]
#[command(name = "fittrack")]
#[command(version = "0.1.0")]
#[command(about = "Workout summary calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Summary output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default()?,
    };
    config.logging.level = config.logging.level.raised_by(cli.verbose);
    logging::init_logging(&config.logging)?;

    let format = cli.format.unwrap_or(config.output.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run_batch(&config.packages, format, &mut out) {
        report_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

fn report_error(error: &TrackerError) {
    eprintln!("{} {}", "error:".red().bold(), error.user_message());
}

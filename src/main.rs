// md2lms — Markdown to LMS-compatible HTML converter
//
// Converts a directory of Markdown files to clean, filtered HTML using only
// the tag vocabulary accepted by Moodle-style description fields.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use md2lms::batch::batch_convert_directory;
use md2lms::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};

/// Convert Markdown files to clean, LMS-compatible HTML.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Directory containing Markdown files (default: ./md-downloads)
    input_dir: Option<PathBuf>,

    /// Directory for converted HTML files (default: ./converted-html-descriptions)
    output_dir: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    let input_dir = cli
        .input_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
    let output_dir = cli
        .output_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    println!("Configuration:");
    println!("  Input directory:  {}", input_dir.display());
    println!("  Output directory: {}", output_dir.display());
    println!("{}", "-".repeat(50));

    let report = batch_convert_directory(&input_dir, &output_dir)?;

    println!("\nConversion complete!");
    println!("Successfully converted: {} files", report.converted);
    println!("Failed to convert: {} files", report.failed);
    if report.resanitized > 0 {
        println!("Processed and sanitized: {} files", report.resanitized);
    }
    println!("\nHTML files saved in: {}", output_dir.display());

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! duplexcat - Concatenate PDF files for duplex printing.
//!
//! CLI entry point: parses arguments, runs validation, drives the
//! concatenation, and writes the output file.

use clap::Parser;
use std::process;

use duplexcat::cli::Cli;
use duplexcat::concat::Concatenator;
use duplexcat::error::DuplexCatError;
use duplexcat::io::PdfWriter;
use duplexcat::output::{OutputFormatter, display_plan, display_validation_summary};
use duplexcat::utils::collect_input_paths;
use duplexcat::validation::Validator;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), DuplexCatError> {
    let inputs = collect_input_paths(&cli.inputs)?;

    if inputs.is_empty() {
        println!("No input files provided.");
        return Ok(());
    }

    let config = cli.to_config(inputs)?;
    let formatter = OutputFormatter::from_config(&config);

    if config.dry_run {
        formatter.info("🔍 DRY RUN MODE - No files will be created");
        formatter.blank_line();
    }

    // All inputs and the output path are checked before the first page is
    // appended, so a bad file fails the run with no processing started.
    formatter.info("Validating input files...");
    let validator = Validator::new();
    let summary = validator.validate_config(&config).await?;
    display_validation_summary(&formatter, &summary);

    if config.dry_run {
        display_plan(&formatter, &summary);
        formatter.blank_line();
        formatter.success("Dry run completed successfully");
        formatter.info(&format!("  Output would be: {}", config.output.display()));
        formatter.info("  Run without --dry-run to create the concatenated PDF");
        return Ok(());
    }

    formatter.blank_line();

    let concatenator = Concatenator::new();
    let result = concatenator.concat(&config, &formatter).await?;

    formatter.blank_line();
    formatter.info(&format!("Writing to: {}", config.output.display()));

    let writer = PdfWriter::new();
    let write_stats = writer
        .save_with_stats(&result.document, &config.output)
        .await?;

    formatter.success(&format!(
        "Concatenated PDF written to {}",
        config.output.display()
    ));

    if formatter.is_verbose() {
        formatter.section("Statistics");
        formatter.detail(
            "Input files",
            &result.statistics.files_processed.to_string(),
        );
        formatter.detail("Total pages", &result.statistics.total_pages.to_string());
        formatter.detail(
            "Blank pages added",
            &result.statistics.blank_pages_added.to_string(),
        );
        formatter.detail("Input size", &result.statistics.format_input_size());
        formatter.detail("Output size", &write_stats.format_file_size());
        formatter.detail(
            "Load time",
            &format!("{:.2}s", result.statistics.load_time.as_secs_f64()),
        );
        formatter.detail(
            "Concat time",
            &format!("{:.2}s", result.statistics.concat_time.as_secs_f64()),
        );
        formatter.detail(
            "Write time",
            &format!("{:.2}s", write_stats.write_time.as_secs_f64()),
        );
    }

    Ok(())
}

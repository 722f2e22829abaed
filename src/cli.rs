//! CLI argument parsing for duplexcat.
//!
//! Defines the command-line surface using `clap` and converts parsed
//! arguments into a validated [`Config`].

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Concatenate PDF files for duplex printing.
///
/// duplexcat merges multiple PDF files into one document, appending a blank
/// page to any input with an odd page count so that every original document
/// starts on a fresh sheet when printed double-sided.
#[derive(Parser, Debug)]
#[command(name = "duplexcat")]
#[command(version)]
#[command(about = "Concatenate PDFs for duplex printing", long_about = None)]
pub struct Cli {
    /// Input PDF files to concatenate (in order)
    ///
    /// Specify multiple files or use glob patterns; patterns are expanded
    /// in sorted order. With no input files, a notice is printed and no
    /// output is created.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Output PDF file path
    ///
    /// The concatenated PDF is written here, overwriting an existing file
    /// unless --no-clobber is given.
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Dry run - validate inputs and preview the plan without creating output
    ///
    /// Checks that every input exists and parses as a PDF, then prints the
    /// per-file page counts and which files would receive a blank page.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - show detailed information about each PDF
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Useful for scripts and automation.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never overwrite an existing output file
    #[arg(long)]
    pub no_clobber: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated [`Config`].
    ///
    /// Input patterns must already be expanded to paths; the binary does
    /// this via [`crate::utils::collect_input_paths`] before calling here.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration fails validation.
    pub fn to_config(&self, inputs: Vec<PathBuf>) -> Result<Config> {
        let config = Config {
            inputs,
            output: self.output.clone(),
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
            no_clobber: self.no_clobber,
        };

        config.validate()?;

        Ok(config)
    }
}

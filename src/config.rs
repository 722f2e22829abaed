//! Run configuration for duplexcat.
//!
//! This module holds the validated, normalized configuration that drives a
//! concatenation run. CLI arguments are converted into a [`Config`] before
//! any file is touched.

use std::path::PathBuf;

use crate::error::{DuplexCatError, Result};

/// Validated configuration for a concatenation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input PDF paths, in concatenation order. May be empty; the binary
    /// handles the empty case before constructing a run.
    pub inputs: Vec<PathBuf>,

    /// Output file path. Created or overwritten on success.
    pub output: PathBuf,

    /// Validate and print the plan without creating output.
    pub dry_run: bool,

    /// Show per-file details and end-of-run statistics.
    pub verbose: bool,

    /// Suppress all non-error output.
    pub quiet: bool,

    /// Refuse to overwrite an existing output file.
    pub no_clobber: bool,
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `verbose` and `quiet` are both set
    /// - the output path is also listed as an input
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(DuplexCatError::invalid_config(
                "Cannot combine --verbose with --quiet",
            ));
        }

        if self.inputs.iter().any(|input| input == &self.output) {
            return Err(DuplexCatError::invalid_config(format!(
                "Output path is also an input: {}",
                self.output.display()
            )));
        }

        Ok(())
    }
}

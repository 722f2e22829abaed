//! duplexcat - Concatenate PDF files for duplex printing.
//!
//! This library merges multiple PDF files into a single document, appending
//! a blank page to any input with an odd page count so that every original
//! document starts on a fresh physical sheet when printed double-sided.
//!
//! # Examples
//!
//! ```no_run
//! use duplexcat::concat::Concatenator;
//! use duplexcat::config::Config;
//! use duplexcat::io::PdfWriter;
//! use duplexcat::output::OutputFormatter;
//! use std::path::PathBuf;
//!
//! # async fn example() -> duplexcat::Result<()> {
//! let config = Config {
//!     inputs: vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     output: PathBuf::from("duplex.pdf"),
//!     dry_run: false,
//!     verbose: false,
//!     quiet: false,
//!     no_clobber: false,
//! };
//!
//! let concatenator = Concatenator::new();
//! let result = concatenator
//!     .concat(&config, &OutputFormatter::quiet())
//!     .await?;
//!
//! let writer = PdfWriter::new();
//! writer.save(&result.document, &config.output).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod concat;
pub mod config;
pub mod error;
pub mod io;
pub mod output;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{DuplexCatError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

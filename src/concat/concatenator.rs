//! The pad-and-append procedure.
//!
//! Inputs are processed strictly in order, one at a time. Each document
//! contributes its pages followed by one blank page when its page count is
//! odd, so every document's contribution to the output is even and the next
//! document starts on a fresh sheet under duplex printing.

use lopdf::Document;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::concat::accumulator::PageAccumulator;
use crate::concat::pages;
use crate::config::Config;
use crate::error::{DuplexCatError, Result};
use crate::io::PdfReader;
use crate::output::OutputFormatter;
use crate::utils::format_file_size;

/// Statistics about a concatenation run.
#[derive(Debug, Clone)]
pub struct ConcatStatistics {
    /// Number of input files processed.
    pub files_processed: usize,

    /// Total number of pages in the output document, padding included.
    pub total_pages: usize,

    /// Number of blank pages inserted.
    pub blank_pages_added: usize,

    /// Total size of input files in bytes.
    pub input_size: u64,

    /// Time spent loading input files.
    pub load_time: Duration,

    /// Total time for the concatenation.
    pub concat_time: Duration,
}

impl ConcatStatistics {
    /// Format input size as a human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a concatenation run.
#[derive(Debug)]
pub struct ConcatResult {
    /// The finished output document.
    pub document: Document,

    /// Statistics about the run.
    pub statistics: ConcatStatistics,

    /// Paths of the files that were concatenated, in order.
    pub processed_files: Vec<PathBuf>,
}

/// Outcome of appending one document to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOutcome {
    /// Pages the document itself contributed.
    pub original_pages: usize,

    /// Whether a blank page was appended after them.
    pub padded: bool,
}

/// Concatenates PDF documents with duplex padding.
pub struct Concatenator {
    reader: PdfReader,
}

impl Concatenator {
    /// Create a new concatenator.
    pub fn new() -> Self {
        Self {
            reader: PdfReader::new(),
        }
    }

    /// Run the full concatenation described by `config`.
    ///
    /// Processes every input in order, printing one `Processing <path>...`
    /// line per file as it begins. The output document is returned to the
    /// caller for writing; nothing touches the output path here.
    ///
    /// # Errors
    ///
    /// Returns `NoInputFiles` for an empty input list; otherwise fails fast
    /// on the first load or append error.
    pub async fn concat(
        &self,
        config: &Config,
        formatter: &OutputFormatter,
    ) -> Result<ConcatResult> {
        if config.inputs.is_empty() {
            return Err(DuplexCatError::NoInputFiles);
        }

        let start = Instant::now();

        let mut accumulator = PageAccumulator::new();
        let mut blank_pages_added = 0;
        let mut input_size = 0;
        let mut load_time = Duration::ZERO;
        let mut processed_files = Vec::with_capacity(config.inputs.len());

        for path in &config.inputs {
            formatter.info(&format!("Processing {}...", path.display()));

            let loaded = self.reader.load(path).await?;
            input_size += loaded.file_size;
            load_time += loaded.load_time;

            let outcome = Self::process_document(&mut accumulator, loaded.document)?;

            if outcome.padded {
                blank_pages_added += 1;
                formatter.debug(&format!(
                    "{} pages, blank page appended",
                    outcome.original_pages
                ));
            } else {
                formatter.debug(&format!("{} pages", outcome.original_pages));
            }

            processed_files.push(path.clone());
        }

        let document = accumulator.finish();

        let statistics = ConcatStatistics {
            files_processed: processed_files.len(),
            total_pages: document.get_pages().len(),
            blank_pages_added,
            input_size,
            load_time,
            concat_time: start.elapsed(),
        };

        Ok(ConcatResult {
            document,
            statistics,
            processed_files,
        })
    }

    /// Append one document to the accumulator, padding to an even count.
    ///
    /// The last page's dimensions are resolved before the document is
    /// consumed, and the blank page copies them exactly. A zero-page
    /// document contributes nothing and receives no padding.
    ///
    /// # Errors
    ///
    /// Returns an error if the page tree cannot be updated or if a padded
    /// document's last page has no resolvable MediaBox.
    pub fn process_document(
        accumulator: &mut PageAccumulator,
        source: Document,
    ) -> Result<DocumentOutcome> {
        let source_pages = source.get_pages();
        let pad_dimensions = if source_pages.len() % 2 == 1 {
            source_pages
                .values()
                .next_back()
                .map(|&last_page_id| pages::page_dimensions(&source, last_page_id))
                .transpose()?
        } else {
            None
        };

        let original_pages = accumulator.append_document(source)?;

        if let Some((width, height)) = pad_dimensions {
            accumulator.append_blank_page(width, height)?;
        }

        Ok(DocumentOutcome {
            original_pages,
            padded: pad_dimensions.is_some(),
        })
    }
}

impl Default for Concatenator {
    fn default() -> Self {
        Self::new()
    }
}

//! PDF reading and loading operations.
//!
//! Loads one document at a time; inputs are never read concurrently. Load
//! failures are classified so that a missing, unreadable, encrypted, or
//! corrupt file each produce a distinct diagnostic.

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{DuplexCatError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf, load_time: Duration) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }
}

/// PDF reader.
///
/// A document with zero pages is a valid (if degenerate) input: it
/// contributes nothing to the output and receives no padding, so the reader
/// does not reject it.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// Parsing runs on a blocking task so the async runtime is not stalled
    /// by large files.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file cannot be read
    /// - the file is not a valid PDF
    /// - the PDF is encrypted
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();

        let start = Instant::now();

        let load_path = path_buf.clone();
        let doc = task::spawn_blocking(move || Document::load(&load_path))
            .await
            .map_err(|e| DuplexCatError::other(format!("Load task failed: {e}")))?
            .map_err(|e| classify_load_error(path_buf.clone(), &e))?;

        let load_time = start.elapsed();

        Ok(LoadedPdf::new(doc, path_buf, load_time))
    }
}

/// Map a lopdf load error to the matching input-error variant.
fn classify_load_error(path: PathBuf, err: &lopdf::Error) -> DuplexCatError {
    let err_msg = err.to_string();
    if err_msg.contains("encrypt") || err_msg.contains("password") {
        DuplexCatError::encrypted_pdf(path)
    } else {
        DuplexCatError::failed_to_load_pdf(path, err_msg)
    }
}

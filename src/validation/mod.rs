//! Pre-flight validation of inputs and the output path.
//!
//! Every input is checked for existence, accessibility, and PDF validity
//! before the first page is appended, so a bad file aborts the run before
//! any `Processing ...` line is printed. Validation is fail-fast: the first
//! error stops the run.

use lopdf::Document;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::concat::pages;
use crate::config::Config;
use crate::error::{DuplexCatError, Result};
use crate::utils::format_file_size;

/// Result of validating a single PDF file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Path to the validated file.
    pub path: PathBuf,

    /// Number of pages in the PDF.
    pub page_count: usize,

    /// PDF version string.
    pub version: String,

    /// Size of the file in bytes.
    pub file_size: u64,

    /// Number of objects in the PDF.
    pub object_count: usize,

    /// Dimensions (width, height) of the last page in points, if the
    /// document has any pages.
    pub last_page_dimensions: Option<(f32, f32)>,
}

impl ValidationResult {
    /// Build a validation result from a loaded document.
    ///
    /// Last-page dimensions are resolved best-effort; a document that needs
    /// no padding is not rejected for a missing MediaBox.
    fn from_document(path: PathBuf, doc: &Document) -> Self {
        let doc_pages = doc.get_pages();
        let page_count = doc_pages.len();

        let last_page_dimensions = doc_pages
            .values()
            .next_back()
            .and_then(|&last_page_id| pages::page_dimensions(doc, last_page_id).ok());

        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            path,
            page_count,
            version: doc.version.clone(),
            file_size,
            object_count: doc.objects.len(),
            last_page_dimensions,
        }
    }

    /// Whether this document will receive a blank page.
    pub fn needs_padding(&self) -> bool {
        self.page_count % 2 == 1
    }

    /// Pages this document will contribute to the output.
    pub fn padded_page_count(&self) -> usize {
        if self.needs_padding() {
            self.page_count + 1
        } else {
            self.page_count
        }
    }
}

/// Summary of validation results for multiple files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// Individual validation results for each file, in input order.
    pub results: Vec<ValidationResult>,

    /// Total number of pages across all input files, before padding.
    pub total_pages: usize,

    /// Total number of pages the output will contain, padding included.
    pub total_output_pages: usize,

    /// Number of files that will receive a blank page.
    pub files_padded: usize,

    /// Total input size in bytes.
    pub total_size: u64,

    /// Number of files that passed validation.
    pub files_validated: usize,
}

impl ValidationSummary {
    /// Create a summary from validation results.
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let total_pages = results.iter().map(|r| r.page_count).sum();
        let total_output_pages = results.iter().map(|r| r.padded_page_count()).sum();
        let files_padded = results.iter().filter(|r| r.needs_padding()).count();
        let total_size = results.iter().map(|r| r.file_size).sum();
        let files_validated = results.len();

        Self {
            results,
            total_pages,
            total_output_pages,
            files_padded,
            total_size,
            files_validated,
        }
    }

    /// Format the total file size as a human-readable string.
    pub fn format_total_size(&self) -> String {
        format_file_size(self.total_size)
    }
}

/// Validator for input files and the output path.
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate a single input file.
    ///
    /// A zero-page document passes validation; it will simply contribute
    /// nothing to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file does not exist
    /// - the path is not a regular file
    /// - the file is not accessible
    /// - the file is empty or not a valid PDF
    /// - the PDF is encrypted
    pub async fn validate_file(&self, path: &Path) -> Result<ValidationResult> {
        if !path.exists() {
            return Err(DuplexCatError::file_not_found(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(DuplexCatError::not_a_file(path.to_path_buf()));
        }

        let metadata =
            tokio::fs::metadata(path)
                .await
                .map_err(|e| DuplexCatError::FileNotAccessible {
                    path: path.to_path_buf(),
                    source: e,
                })?;

        if metadata.len() == 0 {
            return Err(DuplexCatError::corrupted_pdf(
                path.to_path_buf(),
                "File is empty",
            ));
        }

        let doc = Document::load(path).map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("encrypt") || err_msg.contains("password") {
                DuplexCatError::encrypted_pdf(path.to_path_buf())
            } else {
                DuplexCatError::failed_to_load_pdf(path.to_path_buf(), err_msg)
            }
        })?;

        Ok(ValidationResult::from_document(path.to_path_buf(), &doc))
    }

    /// Validate all input files in order, failing fast on the first error.
    pub async fn validate_files(&self, paths: &[PathBuf]) -> Result<ValidationSummary> {
        let mut results = Vec::with_capacity(paths.len());

        for path in paths {
            results.push(self.validate_file(path).await?);
        }

        Ok(ValidationSummary::from_results(results))
    }

    /// Validate the output path.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file exists and `--no-clobber` is
    /// set, or if the output directory does not exist or is not writable.
    pub async fn validate_output(&self, config: &Config) -> Result<()> {
        let output_path = &config.output;

        if config.no_clobber && output_path.exists() {
            return Err(DuplexCatError::output_exists(output_path.clone()));
        }

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            if !parent.exists() {
                return Err(DuplexCatError::invalid_config(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }

            let metadata =
                tokio::fs::metadata(parent)
                    .await
                    .map_err(|e| DuplexCatError::FileNotAccessible {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;

            if metadata.permissions().readonly() {
                return Err(DuplexCatError::invalid_config(format!(
                    "Output directory is not writable: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }

    /// Validate the complete configuration: all inputs, then the output.
    pub async fn validate_config(&self, config: &Config) -> Result<ValidationSummary> {
        let summary = self.validate_files(&config.inputs).await?;
        self.validate_output(config).await?;
        Ok(summary)
    }
}

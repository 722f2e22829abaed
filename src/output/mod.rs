//! Output formatting and display.
//!
//! All user-facing progress and status lines go through here, so quiet and
//! verbose modes apply uniformly.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::validation::ValidationSummary;

/// Display a validation summary to the user.
pub fn display_validation_summary(formatter: &OutputFormatter, summary: &ValidationSummary) {
    formatter.info(&format!(
        "Validated {} file(s): {} pages, {}",
        summary.files_validated,
        summary.total_pages,
        summary.format_total_size()
    ));

    if summary.files_padded > 0 {
        formatter.info(&format!(
            "{} file(s) will receive a blank page ({} output pages)",
            summary.files_padded, summary.total_output_pages
        ));
    }
}

/// Display the per-file concatenation plan (dry-run mode).
pub fn display_plan(formatter: &OutputFormatter, summary: &ValidationSummary) {
    formatter.section("Concatenation plan:");

    for (idx, result) in summary.results.iter().enumerate() {
        let padding = if result.needs_padding() {
            ", +1 blank"
        } else {
            ""
        };
        formatter.info(&format!(
            "  {}. {} ({} pages{})",
            idx + 1,
            result.path.display(),
            result.page_count,
            padding
        ));
    }

    formatter.info(&format!(
        "  Total pages in output: {}",
        summary.total_output_pages
    ));
}

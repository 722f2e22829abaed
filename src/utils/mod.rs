//! Utilities for input path collection and display formatting.

use std::path::PathBuf;

use crate::error::{DuplexCatError, Result};

/// Expand input arguments into filesystem paths.
///
/// Each argument is treated as a glob pattern and expanded in sorted order.
/// An argument that matches nothing is kept verbatim as a literal path, so a
/// misspelled or missing file surfaces later as a file-not-found error
/// instead of silently disappearing from the input list.
///
/// Accepts anything iterable with items that convert to `&str`, e.g.
/// `&[&str]`, `Vec<String>`, or `Vec<&str>`.
///
/// # Errors
///
/// Returns an error if a pattern fails to parse or a glob entry cannot be
/// read from the filesystem.
pub fn collect_input_paths<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        let pattern = pattern.as_ref();

        let entries = glob::glob(pattern).map_err(|err| {
            DuplexCatError::invalid_config(format!("Invalid input pattern '{pattern}': {err}"))
        })?;

        let mut matched = false;
        for entry in entries {
            let path = entry.map_err(|err| DuplexCatError::Other {
                message: err.to_string(),
            })?;
            resolved_paths.push(path);
            matched = true;
        }

        if !matched {
            resolved_paths.push(PathBuf::from(pattern));
        }
    }

    Ok(resolved_paths)
}

/// Format a byte count as a human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}

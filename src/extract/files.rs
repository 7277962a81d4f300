//! Input-file validation.
//!
//! A whitelist check on MIME types derived from the file extension. Purely
//! advisory: the mock extraction never opens the files, but an unsupported
//! selection still blocks the upload step with an inline message.

use crate::error::ValidationError;
use std::path::{Path, PathBuf};

/// Supported extensions and their MIME types.
const SUPPORTED_TYPES: &[(&str, &str)] = &[
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("csv", "text/csv"),
    ("txt", "text/plain"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
];

/// Returns the whitelisted MIME type for a path, or `None` when the
/// extension is unsupported.
#[must_use]
pub fn mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    SUPPORTED_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Checks a file selection against the whitelist.
///
/// # Errors
///
/// Returns [`ValidationError::EmptySelection`] for an empty list and
/// [`ValidationError::UnsupportedFileType`] naming the first offending file.
pub fn validate_files(files: &[PathBuf]) -> Result<(), ValidationError> {
    if files.is_empty() {
        return Err(ValidationError::EmptySelection);
    }

    for file in files {
        if mime_type(file).is_none() {
            return Err(ValidationError::UnsupportedFileType { path: file.clone() });
        }
    }

    Ok(())
}

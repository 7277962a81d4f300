//! Error types for IFC Mapper.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when validating the uploaded file selection.
///
/// Validation is advisory: the mock extraction never reads file contents, so
/// a failure only blocks the forward transition with an inline message and
/// never propagates past the upload step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The file's type is not on the supported whitelist.
    #[error("'{path}' is not supported. Please upload Excel, CSV, Word or text files only.")]
    UnsupportedFileType { path: PathBuf },

    /// No files were selected at all.
    #[error("Please select at least one file to upload")]
    EmptySelection,
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

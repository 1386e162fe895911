//! Error types for the TNV CLI
//!
//! User-facing errors with clear, actionable messages that say what went
//! wrong and how to fix it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Reference data could not be loaded
    #[error("Could not load reference taxonomy: {0}. Check that nodes.dmp and names.dmp come from the same taxdump release.")]
    Ingest(#[from] tnv_ingest::IngestError),

    /// Reference data is structurally unsound
    #[error("Reference taxonomy is inconsistent: {0}. Re-download the taxdump archive and try again.")]
    Reference(#[from] tnv_common::ReferenceDataError),

    /// The requested column header was not found in the input file
    #[error("Column '{column}' not found in '{}'. Pass the exact header title with --column.", .path.display())]
    ColumnNotFound { column: String, path: PathBuf },

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// Delimited input or report output failed
    #[error("Delimited file error: {0}. Check the file encoding and the --delimiter flag.")]
    Csv(#[from] csv::Error),

    /// JSON report serialization failed
    #[error("Failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid flag combination or value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

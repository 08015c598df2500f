//! Error types for the normcheck library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for EDA pipeline operations.
pub type Result<T> = std::result::Result<T, EdaError>;

/// Errors that can occur while loading data or running the numeric core.
///
/// File and schema errors are fatal and propagate to the caller; `Domain`
/// errors are fatal at the top level ("no valid numeric data at all") but
/// are caught and downgraded to an unscored candidate inside the transform
/// evaluator.
#[derive(Error, Debug)]
pub enum EdaError {
    /// Required input file does not exist.
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    /// Required column(s) absent from the input.
    #[error("missing required column(s): expected {expected:?}, found {found:?}")]
    Schema {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Numeric precondition violated (degenerate data, failed fit, empty
    /// positive subsequence).
    #[error("domain error: {0}")]
    Domain(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

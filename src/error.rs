//! Error types for contact extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort an extraction run
///
/// Only the outer surfaces fail: the resolver, pattern and pipeline are
/// total and degrade to defaults instead.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The input collection could not be read from disk
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input is neither a JSON array nor line-delimited JSON
    #[error("Malformed record collection: {0}")]
    Json(#[from] serde_json::Error),

    /// The output table could not be encoded
    #[error("Failed to write output table: {0}")]
    Csv(#[from] csv::Error),

    /// The output table could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

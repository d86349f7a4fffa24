//! Error types for bandit-transcripts

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Bandit-transcripts error types
#[derive(Error, Debug)]
pub enum Error {
    /// Configured input directory does not exist
    #[error("data directory not found: {}", .0.display())]
    MissingDataDirectory(PathBuf),

    /// Malformed tabular resource (unreadable or wrong structure)
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

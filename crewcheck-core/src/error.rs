//! Error types for crewcheck.
//!
//! Only the loading boundaries (dataset files, configuration) can fail.
//! Board queries are total and never return these.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading data or configuration.
#[derive(Error, Debug)]
pub enum CrewCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Unsupported dataset format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("Dataset parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crewcheck operations.
pub type CrewCheckResult<T> = Result<T, CrewCheckError>;

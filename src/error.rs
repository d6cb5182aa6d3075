//! Error types for the agenda library
//!
//! Per-line problems are `ParseError`s and never abort a run.
//! Problems with the control file are `SourceError`s and are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a single todo line into a task
#[derive(Debug, Error)]
pub enum ParseError {
    /// The line has no tokens at all
    #[error("blank line")]
    Blank,
    /// A `due:` token was present but its value is not laid out as YYYY-MM-DD
    #[error("invalid due date '{value}': expected YYYY-MM-DD")]
    MalformedDueDate { value: String },
    /// A `due:` token was present but its date could not be parsed
    #[error("invalid due date '{value}': {source}")]
    InvalidDueDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Failure to read the control file listing the todo files
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to open file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error reading file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

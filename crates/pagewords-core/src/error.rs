//! Error types for pagewords-core.
//!
//! Only a handful of failures are ever surfaced to callers: listing the
//! pages directory and writing reports. Everything that goes wrong inside a
//! single page is reported as a [`PagewordsError`] to the scanner, which logs
//! it and moves on.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for pagewords operations.
#[derive(Debug, Error)]
pub enum PagewordsError {
    /// The pages directory could not be listed.
    #[error("Cannot list pages directory {path:?}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page file could not be read.
    #[error("Cannot read {path:?}: {source}")]
    ReadPage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page is not valid JSON or does not have the page shape.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// An item could not be classified (e.g. non-string text on an indexed type).
    #[error("Classification error: {0}")]
    ClassifyError(String),

    /// A report file could not be written.
    #[error("Cannot write report {path:?}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for pagewords operations.
pub type Result<T> = std::result::Result<T, PagewordsError>;

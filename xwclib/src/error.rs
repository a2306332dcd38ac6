//! Error types for xwclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting a source
#[derive(Error, Debug)]
pub enum WcError {
    /// Source could not be opened or read
    #[error("{}: {}", .path.display(), .source)]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

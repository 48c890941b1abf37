//! Error types for event log backends.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of an event log backend.
#[derive(Error, Debug)]
pub enum LogError {
    /// The event log could not be opened.
    #[error("cannot open event log '{}': {source}", path.display())]
    Open {
        /// Location of the event log.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be written or flushed.
    #[error("event log write failed: {0}")]
    Write(#[from] std::io::Error),

    /// The event log was already closed.
    #[error("event log is closed")]
    Closed,
}

/// A specialized `Result` type for event log operations.
pub type LogResult<T> = Result<T, LogError>;

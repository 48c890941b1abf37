//! # Error Types — Policy Load Failures
//!
//! Every failure is classified at the stage where it happens and returned
//! unchanged. Callers branch on [`EnforcementError::kind`] instead of the
//! rendered message; the underlying cause stays reachable through
//! [`std::error::Error::source`].

use std::path::PathBuf;

use thiserror::Error;

/// Error returned by the policy loading pipeline.
#[derive(Error, Debug)]
pub enum EnforcementError {
    /// The path does not carry the policy file extension. The file is
    /// never opened.
    #[error("unsupported policy file type for '{}': expected a .json file", path.display())]
    FileType {
        /// Path that was rejected.
        path: PathBuf,
    },

    /// The file could not be opened or read.
    #[error("cannot read policy file '{}': {source}", path.display())]
    InvalidFile {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content is not a valid policy document.
    #[error("cannot parse policy document: {source}")]
    Parsing {
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Classification of an [`EnforcementError`], comparable without looking
/// at messages or causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong file extension.
    FileType,
    /// Missing or unreadable file.
    InvalidFile,
    /// Undecodable content.
    Parsing,
}

impl ErrorKind {
    /// Short stable label, suitable for structured log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileType => "file_type",
            Self::InvalidFile => "invalid_file",
            Self::Parsing => "parsing",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EnforcementError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileType { .. } => ErrorKind::FileType,
            Self::InvalidFile { .. } => ErrorKind::InvalidFile,
            Self::Parsing { .. } => ErrorKind::Parsing,
        }
    }

    /// Returns `true` if this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }
}

impl From<serde_json::Error> for EnforcementError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parsing { source }
    }
}

/// A specialized `Result` type for policy loading.
pub type EnforcementResult<T> = Result<T, EnforcementError>;

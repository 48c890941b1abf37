//! # Policy Loader
//!
//! Validates, reads, and decodes one policy source, then normalizes it.
//!
//! ```text
//! path ──► read_policy_file ──► parse_document ──► dedupe ──► EnforcementDocument
//!              │                     │
//!              ├─ FileType           └─ Parsing
//!              └─ InvalidFile
//! ```
//!
//! The extension check runs before any filesystem access. A path with the
//! wrong extension is rejected even when it names a directory or does not
//! exist.

use std::path::Path;

use crate::document::EnforcementDocument;
use crate::error::{EnforcementError, EnforcementResult};

/// Extension every policy file must carry. Compared case-sensitively.
pub const POLICY_EXTENSION: &str = "json";

/// Checks the extension of `path` and reads the whole file.
///
/// # Errors
///
/// - [`EnforcementError::FileType`] if the extension is not exactly `json`.
/// - [`EnforcementError::InvalidFile`] if the file cannot be opened or read.
pub fn read_policy_file(path: impl AsRef<Path>) -> EnforcementResult<Vec<u8>> {
    let path = path.as_ref();

    if path.extension().and_then(|e| e.to_str()) != Some(POLICY_EXTENSION) {
        return Err(EnforcementError::FileType {
            path: path.to_path_buf(),
        });
    }

    std::fs::read(path).map_err(|source| EnforcementError::InvalidFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes raw bytes into an [`EnforcementDocument`].
///
/// The root must be a JSON object. Absent keys become empty lists, keys
/// match case-insensitively, and unknown keys are ignored. The returned
/// document is not yet deduplicated.
///
/// # Errors
///
/// Returns [`EnforcementError::Parsing`] for malformed JSON or a
/// structurally wrong document (e.g. a non-object root, or `"required"`
/// given as a string).
pub fn parse_document(bytes: &[u8]) -> EnforcementResult<EnforcementDocument> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Loads the policy file at `path` and returns its normalized document.
///
/// Callers that treat a bad source as ignorable can fall back to an empty
/// policy with `load(path).unwrap_or_default()`.
///
/// # Errors
///
/// Propagates the first failing stage unchanged: see [`read_policy_file`]
/// and [`parse_document`].
pub fn load(path: impl AsRef<Path>) -> EnforcementResult<EnforcementDocument> {
    let path = path.as_ref();
    let bytes = read_policy_file(path)?;
    let mut document = parse_document(&bytes)?;
    document.dedupe();

    tracing::debug!(
        path = %path.display(),
        required = document.required.len(),
        hidden = document.hidden.len(),
        excluded_drivers = document.excluded_drivers.len(),
        "loaded enforcement policy"
    );

    Ok(document)
}

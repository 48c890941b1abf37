//! # upkeep-enforcement — Enforcement Policy Loader
//!
//! Reads a single per-source policy file and produces a normalized
//! [`EnforcementDocument`]: the update identifiers that must be installed,
//! the identifiers hidden from the user-facing list, and the driver
//! exclusion rules that keep specific drivers out of update actions.
//!
//! ## Pipeline
//!
//! Every call to [`load`] runs the same three stages, in order:
//!
//! 1. **Validate and read** (`loader.rs`): the path must carry the `.json`
//!    extension (case-sensitive) and must be readable in full.
//! 2. **Parse** (`loader.rs`): the bytes are decoded with `serde_json`.
//!    Missing keys decode to empty lists.
//! 3. **Deduplicate** (`document.rs`): each list keeps only the first
//!    occurrence of every element, in source order.
//!
//! A failure at any stage aborts the call and returns an
//! [`EnforcementError`] classified by [`ErrorKind`]. Nothing is retried or
//! logged at error level here; the caller decides whether a bad policy
//! source is fatal.
//!
//! ## Crate Policy
//!
//! - No shared state. Each load is a pure function of the path and the
//!   file content, so concurrent loads need no coordination.
//! - Policy files are never written.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

#![deny(unsafe_code)]

pub mod document;
pub mod error;
pub mod loader;

pub use document::{dedupe_preserving_order, DriverExclude, EnforcementDocument};
pub use error::{EnforcementError, EnforcementResult, ErrorKind};
pub use loader::{load, parse_document, read_policy_file, POLICY_EXTENSION};

//! # Policy CLI — Inspect and check enforcement policy files.
//!
//! ## Usage
//!
//! ```bash
//! # Print the normalized document for one policy source:
//! upkeep policy show policies/required.json
//!
//! # Same, as pretty JSON:
//! upkeep policy show policies/required.json --json
//!
//! # Load every *.json file in a directory, each on its own:
//! upkeep policy check policies/
//! ```
//!
//! `check` never stops at the first bad file. Each rejected source is
//! reported and recorded in the event log; the exit code is 1 if any
//! source was rejected.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use upkeep_enforcement::{EnforcementDocument, EnforcementError, POLICY_EXTENSION};
use upkeep_logger::{EventLog, EVENT_POLICY_LOADED, EVENT_POLICY_REJECTED};

/// Policy subcommand arguments.
#[derive(Args, Debug)]
pub struct PolicyArgs {
    #[command(subcommand)]
    pub command: PolicyCommand,
}

/// Available policy subcommands.
#[derive(Subcommand, Debug)]
pub enum PolicyCommand {
    /// Load one policy file and print its normalized content.
    Show {
        /// Path to the policy file.
        path: PathBuf,

        /// Print the document as pretty JSON.
        #[arg(long)]
        json: bool,
    },

    /// Load every policy file in a directory and report the result of each.
    Check {
        /// Directory holding policy files.
        dir: PathBuf,
    },
}

/// Execute the policy subcommand.
pub fn run_policy(args: &PolicyArgs, log: &dyn EventLog) -> Result<u8> {
    match &args.command {
        PolicyCommand::Show { path, json } => run_show(path, *json, log),
        PolicyCommand::Check { dir } => run_check(dir, log),
    }
}

fn run_show(path: &Path, json: bool, log: &dyn EventLog) -> Result<u8> {
    let document = match upkeep_enforcement::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            log.warning(EVENT_POLICY_REJECTED, &rejected_message(path, &e))?;
            return Err(e).with_context(|| format!("failed to load {}", path.display()));
        }
    };
    log.info(EVENT_POLICY_LOADED, &loaded_message(path, &document))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print!("{}", render_document(&document));
    }
    Ok(0)
}

fn run_check(dir: &Path, log: &dyn EventLog) -> Result<u8> {
    let report = check_directory(dir, log)?;

    for entry in &report.entries {
        match &entry.outcome {
            Ok(doc) => println!(
                "  ok            {}  (required: {}, hidden: {}, excluded drivers: {})",
                entry.path.display(),
                doc.required.len(),
                doc.hidden.len(),
                doc.excluded_drivers.len()
            ),
            Err(e) => println!("  {:<13} {}  {e}", e.kind().as_str(), entry.path.display()),
        }
    }
    println!();
    println!(
        "Total: {} policy files, {} rejected",
        report.entries.len(),
        report.rejected()
    );

    Ok(if report.rejected() == 0 { 0 } else { 1 })
}

/// Outcome of loading one file during a directory check.
#[derive(Debug)]
pub struct CheckEntry {
    /// File that was loaded.
    pub path: PathBuf,
    /// Normalized document, or the classified failure.
    pub outcome: Result<EnforcementDocument, EnforcementError>,
}

/// Per-file results of a directory check, sorted by path.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// One entry per policy file.
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    /// Number of files that failed to load.
    pub fn rejected(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_err()).count()
    }
}

/// Loads every `*.json` file directly inside `dir`, independently.
///
/// Each outcome is recorded in `log`. Subdirectories are not visited.
///
/// # Errors
///
/// Fails if the directory cannot be listed or the event log rejects a
/// record. A policy file that fails to load is not an error here.
pub fn check_directory(dir: &Path, log: &dyn EventLog) -> Result<CheckReport> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read policy directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == POLICY_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();

    tracing::debug!(dir = %dir.display(), count = paths.len(), "checking policy files");

    let mut report = CheckReport::default();
    for path in paths {
        let outcome = upkeep_enforcement::load(&path);
        match &outcome {
            Ok(doc) => log.info(EVENT_POLICY_LOADED, &loaded_message(&path, doc))?,
            Err(e) => log.warning(EVENT_POLICY_REJECTED, &rejected_message(&path, e))?,
        }
        report.entries.push(CheckEntry { path, outcome });
    }
    Ok(report)
}

/// Human-readable rendering of a document, one section per list.
pub fn render_document(document: &EnforcementDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Required ({}):", document.required.len());
    for id in &document.required {
        let _ = writeln!(out, "  {id}");
    }
    let _ = writeln!(out, "Hidden ({}):", document.hidden.len());
    for id in &document.hidden {
        let _ = writeln!(out, "  {id}");
    }
    let _ = writeln!(out, "Excluded drivers ({}):", document.excluded_drivers.len());
    for rule in &document.excluded_drivers {
        let class = if rule.driver_class.is_empty() { "-" } else { rule.driver_class.as_str() };
        let update = if rule.update_id.is_empty() { "-" } else { rule.update_id.as_str() };
        let _ = writeln!(out, "  class: {class:<20} update: {update}");
    }
    out
}

fn loaded_message(path: &Path, document: &EnforcementDocument) -> String {
    format!(
        "loaded policy {}: {} required, {} hidden, {} excluded drivers",
        path.display(),
        document.required.len(),
        document.hidden.len(),
        document.excluded_drivers.len()
    )
}

fn rejected_message(path: &Path, error: &EnforcementError) -> String {
    format!("rejected policy {} ({}): {error}", path.display(), error.kind())
}

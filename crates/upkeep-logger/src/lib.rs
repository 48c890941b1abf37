//! # upkeep-logger — Event Log Bridge
//!
//! One capability, [`EventLog`], with four operations: `info`, `warning`,
//! `error` (each tagged with a numeric event id) and `close`. Components
//! receive an `EventLog` handle explicitly; there is no global logger.
//!
//! ## Backends
//!
//! - [`ConsoleLog`] — interactive/debug runs. Writes plain lines to stderr.
//! - [`FileEventLog`] — managed service runs. Appends timestamped records
//!   to `<log_dir>/<source>.log`; opening can fail.
//! - [`TracingLog`] — the application logger, forwarding to `tracing`.
//! - [`DualLog`] — fan-out over a primary and a secondary backend.
//!
//! ## Fan-out Semantics
//!
//! `DualLog` calls the primary first. If the primary fails, the error is
//! returned and the secondary is **not** called for that record. `close`
//! follows the same order and short-circuit.
//!
//! ## Construction
//!
//! [`new_logger`] picks the primary from [`LoggerConfig::run_in_debug`] and
//! wraps it in a `DualLog` with `TracingLog` when
//! [`LoggerConfig::show_output`] is set.

pub mod config;
pub mod console;
pub mod dual;
pub mod error;
pub mod file;
pub mod tracing_log;

pub use config::LoggerConfig;
pub use console::ConsoleLog;
pub use dual::DualLog;
pub use error::{LogError, LogResult};
pub use file::FileEventLog;
pub use tracing_log::TracingLog;

/// Event id for a policy source that loaded successfully.
pub const EVENT_POLICY_LOADED: u32 = 100;
/// Event id for a policy source that was rejected.
pub const EVENT_POLICY_REJECTED: u32 = 101;
/// Event id for an orderly shutdown.
pub const EVENT_SHUTDOWN: u32 = 900;

/// Severity of an event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Informational.
    Info,
    /// Something unexpected that did not stop the operation.
    Warning,
    /// An operation failed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// An event log sink.
///
/// Implementors provide [`write`](EventLog::write) and
/// [`close`](EventLog::close); the severity helpers forward to `write`.
pub trait EventLog: Send + Sync {
    /// Records `msg` with the given severity and event id.
    fn write(&self, severity: Severity, eid: u32, msg: &str) -> LogResult<()>;

    /// Releases the sink. Writes after a close may fail.
    fn close(&self) -> LogResult<()>;

    /// Logs with the Info severity.
    fn info(&self, eid: u32, msg: &str) -> LogResult<()> {
        self.write(Severity::Info, eid, msg)
    }

    /// Logs with the Warning severity.
    fn warning(&self, eid: u32, msg: &str) -> LogResult<()> {
        self.write(Severity::Warning, eid, msg)
    }

    /// Logs with the Error severity.
    fn error(&self, eid: u32, msg: &str) -> LogResult<()> {
        self.write(Severity::Error, eid, msg)
    }
}

impl<T: EventLog + ?Sized> EventLog for Box<T> {
    fn write(&self, severity: Severity, eid: u32, msg: &str) -> LogResult<()> {
        (**self).write(severity, eid, msg)
    }

    fn close(&self) -> LogResult<()> {
        (**self).close()
    }
}

/// Builds the event log described by `config`.
///
/// # Errors
///
/// Returns [`LogError::Open`] if service mode is selected and the event
/// log file cannot be opened.
pub fn new_logger(config: &LoggerConfig) -> LogResult<Box<dyn EventLog>> {
    let primary: Box<dyn EventLog> = if config.run_in_debug {
        Box::new(ConsoleLog::new(&config.source_name))
    } else {
        Box::new(FileEventLog::open(&config.log_dir, &config.source_name)?)
    };

    if !config.show_output {
        return Ok(primary);
    }

    tracing::debug!(source = %config.source_name, "duplicating event log to application logger");
    Ok(Box::new(DualLog::new(
        primary,
        TracingLog::new(&config.source_name),
    )))
}

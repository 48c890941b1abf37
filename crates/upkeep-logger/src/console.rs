//! Console event log for interactive and debug runs.

use std::io::Write;
use std::sync::Mutex;

use crate::error::{LogError, LogResult};
use crate::{EventLog, Severity};

/// Writes one line per record: `<source> <SEVERITY> <eid>: <msg>`.
pub struct ConsoleLog {
    source: String,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleLog {
    /// Creates a console log writing to stderr.
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_writer(source, std::io::stderr())
    }

    /// Creates a console log writing to `out`.
    pub fn with_writer(source: impl Into<String>, out: impl Write + Send + 'static) -> Self {
        Self {
            source: source.into(),
            out: Mutex::new(Box::new(out)),
        }
    }
}

impl std::fmt::Debug for ConsoleLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleLog")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl EventLog for ConsoleLog {
    fn write(&self, severity: Severity, eid: u32, msg: &str) -> LogResult<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| LogError::Write(std::io::Error::other("console writer poisoned")))?;
        writeln!(out, "{} {severity} {eid}: {msg}", self.source)?;
        Ok(())
    }

    fn close(&self) -> LogResult<()> {
        Ok(())
    }
}

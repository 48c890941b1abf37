//! # Fan-out Event Log
//!
//! Sends every record to a primary backend, then to a secondary one.
//!
//! If the primary fails, its error is returned and the secondary is skipped
//! for that record. This also applies to `close`: a primary that fails to
//! close leaves the secondary open.

use crate::error::LogResult;
use crate::{EventLog, Severity};

/// Event log writing to two backends in sequence.
#[derive(Debug)]
pub struct DualLog<P, S> {
    primary: P,
    secondary: S,
}

impl<P: EventLog, S: EventLog> DualLog<P, S> {
    /// Creates a fan-out over `primary` then `secondary`.
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    /// Returns the primary backend.
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// Returns the secondary backend.
    pub fn secondary(&self) -> &S {
        &self.secondary
    }
}

impl<P: EventLog, S: EventLog> EventLog for DualLog<P, S> {
    fn write(&self, severity: Severity, eid: u32, msg: &str) -> LogResult<()> {
        self.primary.write(severity, eid, msg)?;
        self.secondary.write(severity, eid, msg)
    }

    fn close(&self) -> LogResult<()> {
        self.primary.close()?;
        self.secondary.close()
    }
}

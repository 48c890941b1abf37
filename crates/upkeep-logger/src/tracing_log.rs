//! Application logger backend: forwards event records to `tracing`.

use crate::error::LogResult;
use crate::{EventLog, Severity};

/// Event log that emits `tracing` events under the `upkeep::event` target.
///
/// Never fails. Output depends on the subscriber installed by the binary.
#[derive(Debug, Clone)]
pub struct TracingLog {
    source: String,
}

impl TracingLog {
    /// Creates a tracing-backed log tagged with `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl EventLog for TracingLog {
    fn write(&self, severity: Severity, eid: u32, msg: &str) -> LogResult<()> {
        match severity {
            Severity::Info => {
                tracing::info!(target: "upkeep::event", source = %self.source, event_id = eid, "{msg}")
            }
            Severity::Warning => {
                tracing::warn!(target: "upkeep::event", source = %self.source, event_id = eid, "{msg}")
            }
            Severity::Error => {
                tracing::error!(target: "upkeep::event", source = %self.source, event_id = eid, "{msg}")
            }
        }
        Ok(())
    }

    fn close(&self) -> LogResult<()> {
        Ok(())
    }
}

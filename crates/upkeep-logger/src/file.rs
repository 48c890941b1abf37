//! # Service Event Log
//!
//! Append-only event log used when running as a managed service. Records
//! land in `<log_dir>/<source>.log`, one per line:
//!
//! ```text
//! 2026-10-15T08:30:00Z WARNING [upkeep] eid=101 policy rejected
//! ```
//!
//! The directory is never created here. A missing or unwritable directory
//! is an open failure, reported to the caller of [`FileEventLog::open`].

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};

use crate::error::{LogError, LogResult};
use crate::{EventLog, Severity};

/// File-backed event log.
#[derive(Debug)]
pub struct FileEventLog {
    source: String,
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileEventLog {
    /// Opens (or creates) `<log_dir>/<source>.log` for appending.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be opened.
    pub fn open(log_dir: impl AsRef<Path>, source: impl Into<String>) -> LogResult<Self> {
        let source = source.into();
        let path = log_dir.as_ref().join(format!("{source}.log"));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::Open {
                path: path.clone(),
                source: e,
            })?;

        tracing::debug!(path = %path.display(), "opened service event log");

        Ok(Self {
            source,
            path,
            file: Mutex::new(Some(file)),
        })
    }

    /// Returns the path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> LogResult<std::sync::MutexGuard<'_, Option<File>>> {
        self.file
            .lock()
            .map_err(|_| LogError::Write(std::io::Error::other("event log handle poisoned")))
    }
}

impl EventLog for FileEventLog {
    fn write(&self, severity: Severity, eid: u32, msg: &str) -> LogResult<()> {
        let mut guard = self.lock()?;
        let file = guard.as_mut().ok_or(LogError::Closed)?;
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        writeln!(file, "{ts} {severity} [{}] eid={eid} {msg}", self.source)?;
        Ok(())
    }

    fn close(&self) -> LogResult<()> {
        let mut guard = self.lock()?;
        let mut file = guard.take().ok_or(LogError::Closed)?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_records() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileEventLog::open(dir.path(), "svc").unwrap();
        log.info(100, "loaded").unwrap();
        log.error(101, "rejected").unwrap();
        log.close().unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("INFO [svc] eid=100 loaded"));
        assert!(lines[1].ends_with("ERROR [svc] eid=101 rejected"));
        // RFC 3339 UTC timestamp prefix.
        assert!(lines[0].split(' ').next().unwrap().ends_with('Z'));
    }

    #[test]
    fn reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        let first = FileEventLog::open(dir.path(), "svc").unwrap();
        first.info(1, "one").unwrap();
        first.close().unwrap();

        let second = FileEventLog::open(dir.path(), "svc").unwrap();
        second.info(2, "two").unwrap();
        second.close().unwrap();

        let content = std::fs::read_to_string(dir.path().join("svc.log")).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn write_after_close_fails() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileEventLog::open(dir.path(), "svc").unwrap();
        log.close().unwrap();
        assert!(matches!(log.info(1, "late"), Err(LogError::Closed)));
        assert!(matches!(log.close(), Err(LogError::Closed)));
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileEventLog::open(dir.path().join("nope"), "svc").unwrap_err();
        match err {
            LogError::Open { path, .. } => assert!(path.ends_with("nope/svc.log")),
            other => panic!("unexpected error: {other}"),
        }
    }
}

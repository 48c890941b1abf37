//! # Logger Configuration
//!
//! Flags that select the event log backends. Deserializable so a host can
//! embed it in its own configuration file; every field has a default.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default event source name.
pub const DEFAULT_SOURCE_NAME: &str = "upkeep";

/// Configuration for [`crate::new_logger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Name that tags every record and names the service log file.
    pub source_name: String,
    /// Duplicate every record to the application logger.
    pub show_output: bool,
    /// Interactive/debug run: log to the console instead of the service
    /// event log.
    pub run_in_debug: bool,
    /// Directory holding the service event log. Must already exist.
    pub log_dir: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            show_output: false,
            run_in_debug: false,
            log_dir: std::env::temp_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: LoggerConfig = serde_json::from_str(r#"{"runInDebug": true}"#).unwrap();
        assert!(config.run_in_debug);
        assert!(!config.show_output);
        assert_eq!(config.source_name, DEFAULT_SOURCE_NAME);
    }

    #[test]
    fn camel_case_keys() {
        let config = LoggerConfig {
            source_name: "svc".into(),
            show_output: true,
            run_in_debug: false,
            log_dir: PathBuf::from("/var/log/upkeep"),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["sourceName"], "svc");
        assert_eq!(json["showOutput"], true);
        assert_eq!(json["logDir"], "/var/log/upkeep");
    }
}

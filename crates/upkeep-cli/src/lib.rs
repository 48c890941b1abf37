//! # upkeep-cli — Command-Line Interface for Upkeep
//!
//! Provides the `upkeep` binary. Argument parsing lives here; loading and
//! normalization are delegated to `upkeep-enforcement`, event records to
//! `upkeep-logger`.
//!
//! ## Subcommands
//!
//! ```bash
//! upkeep policy show policies/required.json
//! upkeep policy show policies/required.json --json
//! upkeep --debug --show-output policy check policies/
//! ```

pub mod policy;

use std::path::PathBuf;

use clap::Args;
use upkeep_logger::LoggerConfig;

/// Global flags that configure the event log.
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Run interactively: write event records to the console instead of
    /// the service event log.
    #[arg(long = "debug", global = true)]
    pub run_in_debug: bool,

    /// Duplicate event records to the application log output.
    #[arg(long, global = true)]
    pub show_output: bool,

    /// Directory holding the service event log.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Event source name.
    #[arg(long, global = true)]
    pub source_name: Option<String>,
}

impl LogArgs {
    /// Builds a [`LoggerConfig`], falling back to defaults for unset flags.
    pub fn to_config(&self) -> LoggerConfig {
        let defaults = LoggerConfig::default();
        LoggerConfig {
            source_name: self.source_name.clone().unwrap_or(defaults.source_name),
            show_output: self.show_output,
            run_in_debug: self.run_in_debug,
            log_dir: self.log_dir.clone().unwrap_or(defaults.log_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_use_logger_defaults() {
        let args = LogArgs {
            run_in_debug: true,
            show_output: false,
            log_dir: None,
            source_name: None,
        };
        let config = args.to_config();
        assert_eq!(config.source_name, LoggerConfig::default().source_name);
        assert_eq!(config.log_dir, LoggerConfig::default().log_dir);
        assert!(config.run_in_debug);
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let args = LogArgs {
            run_in_debug: false,
            show_output: true,
            log_dir: Some(PathBuf::from("/var/log/upkeep")),
            source_name: Some("fleet".into()),
        };
        let config = args.to_config();
        assert_eq!(config.source_name, "fleet");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/upkeep"));
        assert!(config.show_output);
    }
}

//! Backup behavior configuration.
//!
//! Responsibilities:
//! - Define where backups go and how each dashboard document is transformed before writing.
//! - Parse the textual forms used by environment variables, profiles, and CLI flags.
//!
//! Invariants:
//! - `concurrency` is validated to `1..=MAX_CONCURRENCY` by the loader, never here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{DEFAULT_BACKUP_DIR, DEFAULT_CONCURRENCY};
use crate::loader::ConfigError;

/// What is written for each dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupMode {
    /// Only the `dashboard` field of the detail response, untouched.
    Raw,
    /// The full detail response with template-variable selections reset.
    #[default]
    Sanitized,
}

impl BackupMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BackupMode::Raw => "raw",
            BackupMode::Sanitized => "sanitized",
        }
    }
}

impl fmt::Display for BackupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackupMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(BackupMode::Raw),
            "sanitized" => Ok(BackupMode::Sanitized),
            other => Err(ConfigError::InvalidValue {
                var: "mode".to_string(),
                message: format!("must be raw or sanitized (got {other})"),
            }),
        }
    }
}

/// Which template variables the sanitizer resets.
///
/// `First` reproduces the historical behavior: the reset loop runs once per
/// variable but always targets the first entry of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetScope {
    #[default]
    First,
    All,
}

impl ResetScope {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResetScope::First => "first",
            ResetScope::All => "all",
        }
    }
}

impl fmt::Display for ResetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResetScope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(ResetScope::First),
            "all" => Ok(ResetScope::All),
            other => Err(ConfigError::InvalidValue {
                var: "reset_scope".to_string(),
                message: format!("must be first or all (got {other})"),
            }),
        }
    }
}

/// Settings for a backup run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Directory the `<name>.json` files are written to
    pub backup_dir: PathBuf,
    pub mode: BackupMode,
    pub reset_scope: ResetScope,
    /// Maximum number of dashboard fetches in flight
    pub concurrency: usize,
    /// Write indented JSON instead of compact JSON
    pub pretty: bool,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            mode: BackupMode::default(),
            reset_scope: ResetScope::default(),
            concurrency: DEFAULT_CONCURRENCY,
            pretty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_mode_parse() {
        assert_eq!("raw".parse::<BackupMode>().unwrap(), BackupMode::Raw);
        assert_eq!(
            " Sanitized ".parse::<BackupMode>().unwrap(),
            BackupMode::Sanitized
        );
        assert!(matches!(
            "pretty".parse::<BackupMode>(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_reset_scope_parse() {
        assert_eq!("first".parse::<ResetScope>().unwrap(), ResetScope::First);
        assert_eq!("ALL".parse::<ResetScope>().unwrap(), ResetScope::All);
        assert!("every".parse::<ResetScope>().is_err());
    }

    #[test]
    fn test_backup_config_defaults() {
        let config = BackupConfig::default();
        assert_eq!(config.backup_dir, PathBuf::from("grafana"));
        assert_eq!(config.mode, BackupMode::Sanitized);
        assert_eq!(config.reset_scope, ResetScope::First);
        assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
        assert!(!config.pretty);
    }

    #[test]
    fn test_mode_serde_lowercase() {
        let json = serde_json::to_string(&BackupMode::Raw).unwrap();
        assert_eq!(json, "\"raw\"");
        let scope: ResetScope = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(scope, ResetScope::All);
    }
}

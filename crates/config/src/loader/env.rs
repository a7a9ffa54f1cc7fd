//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `GRAFANA_*` environment variables.
//! - Apply their values to a `ConfigLoader` instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return `ConfigError::InvalidValue` naming the variable.

use secrecy::SecretString;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::{BackupMode, ResetScope};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, value: &str, expected: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: expected.to_string(),
    })
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over profile settings.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("GRAFANA_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(token) = env_var_or_none("GRAFANA_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = env_var_or_none("GRAFANA_SKIP_VERIFY") {
        loader.set_skip_verify(Some(parse_env(
            "GRAFANA_SKIP_VERIFY",
            &skip,
            "must be true or false",
        )?));
    }
    if let Some(timeout) = env_var_or_none("GRAFANA_TIMEOUT") {
        let secs: u64 = parse_env("GRAFANA_TIMEOUT", &timeout, "must be a number")?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(dir) = env_var_or_none("GRAFANA_BACKUP_DIR") {
        loader.set_backup_dir(Some(PathBuf::from(dir)));
    }
    if let Some(mode) = env_var_or_none("GRAFANA_BACKUP_MODE") {
        let mode: BackupMode = mode.parse().map_err(|_| ConfigError::InvalidValue {
            var: "GRAFANA_BACKUP_MODE".to_string(),
            message: "must be raw or sanitized".to_string(),
        })?;
        loader.set_mode(Some(mode));
    }
    if let Some(scope) = env_var_or_none("GRAFANA_RESET_SCOPE") {
        let scope: ResetScope = scope.parse().map_err(|_| ConfigError::InvalidValue {
            var: "GRAFANA_RESET_SCOPE".to_string(),
            message: "must be first or all".to_string(),
        })?;
        loader.set_reset_scope(Some(scope));
    }
    if let Some(concurrency) = env_var_or_none("GRAFANA_CONCURRENCY") {
        loader.set_concurrency(Some(parse_env(
            "GRAFANA_CONCURRENCY",
            &concurrency,
            "must be a positive integer",
        )?));
    }

    // Config path and profile name from environment (only if not already set via CLI)
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none("GRAFANA_CONFIG_PATH")
    {
        loader.set_config_path(Some(PathBuf::from(config_path)));
    }
    if loader.profile_name().is_none()
        && let Some(profile) = env_var_or_none("GRAFANA_PROFILE")
    {
        loader.set_profile_name(Some(profile));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_GRAFANA_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none());
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(env_var_or_none(key1).is_none());
        });

        let key2 = "_GRAFANA_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(env_var_or_none(key2), Some("test-value".to_string()));
        });
    }
}

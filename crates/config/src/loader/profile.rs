//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Resolve the config file location (explicit path or platform default).
//! - Read the JSON config file and apply the selected profile to a `ConfigLoader`.
//!
//! Invariants:
//! - Profile settings are applied before environment variables (env vars take precedence).
//! - A missing file or profile is recorded for `build()`, not reported here.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::{ConfigFile, ProfileConfig};

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/grafana-backup/config.json`
/// - macOS: `~/Library/Application Support/grafana-backup/config.json`
/// - Windows: `%AppData%\grafana-backup\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "grafana-backup")
        .ok_or(ConfigError::ConfigDirUnavailable)?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

/// Read and parse a config file.
pub(crate) fn read_config_file(path: &std::path::Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the selected profile from the config file to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = match loader.config_path() {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Config file not found");
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let file = read_config_file(&config_path)?;

    match file.profiles.get(&profile_name) {
        Some(profile) => {
            tracing::debug!(profile = %profile_name, "Applying profile");
            apply_profile_config(loader, profile);
        }
        None => loader.set_profile_missing(Some(profile_name)),
    }

    Ok(())
}

fn apply_profile_config(loader: &mut ConfigLoader, profile: &ProfileConfig) {
    if let Some(url) = &profile.base_url {
        loader.set_base_url(Some(url.clone()));
    }
    if let Some(token) = &profile.api_token {
        loader.set_api_token(Some(token.clone()));
    }
    if let Some(skip) = profile.skip_verify {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.set_timeout(Some(std::time::Duration::from_secs(secs)));
    }
    if let Some(dir) = &profile.backup_dir {
        loader.set_backup_dir(Some(dir.clone()));
    }
    if let Some(mode) = profile.mode {
        loader.set_mode(Some(mode));
    }
    if let Some(scope) = profile.reset_scope {
        loader.set_reset_scope(Some(scope));
    }
    if let Some(concurrency) = profile.concurrency {
        loader.set_concurrency(Some(concurrency));
    }
    if let Some(pretty) = profile.pretty {
        loader.set_pretty(Some(pretty));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_matches_expected_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", "grafana-backup")
            .unwrap()
            .config_dir()
            .join("config.json");

        assert_eq!(default_config_path().unwrap(), expected);
    }
}

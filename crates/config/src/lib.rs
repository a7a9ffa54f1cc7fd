//! Configuration management for grafana-backup.
//!
//! This crate provides types and loaders for the Grafana connection and
//! backup settings, merged from a JSON profile file, environment variables,
//! and command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{
    AuthConfig, BackupConfig, BackupMode, Config, ConfigFile, ConnectionConfig, ProfileConfig,
    ResetScope,
};

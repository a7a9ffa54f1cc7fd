//! Configuration type definitions for grafana-backup.
//!
//! Responsibilities:
//! - Define configuration types for authentication, connection, backup behavior, and profiles.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The API token is always held as `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`, `duration_seconds`) are private modules.

mod auth;
mod backup;
pub(crate) mod connection;
mod profile;

pub use auth::AuthConfig;
pub use backup::{BackupConfig, BackupMode, ResetScope};
pub use connection::{Config, ConnectionConfig};
pub use profile::{ConfigFile, ProfileConfig};

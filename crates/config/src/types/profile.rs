//! Profile configuration types.
//!
//! Responsibilities:
//! - Define `ProfileConfig` for named connection/backup profiles.
//! - Define `ConfigFile`, the on-disk JSON document holding the profiles.
//!
//! Invariants:
//! - All profile fields are optional to allow partial profile definitions.
//! - Unknown top-level keys in the config file are ignored.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::types::auth::optional_secret_string;
use crate::types::backup::{BackupMode, ResetScope};

/// Named profile; every field overrides the corresponding default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub base_url: Option<String>,
    #[serde(with = "optional_secret_string")]
    pub api_token: Option<SecretString>,
    pub skip_verify: Option<bool>,
    pub timeout_seconds: Option<u64>,
    pub backup_dir: Option<PathBuf>,
    pub mode: Option<BackupMode>,
    pub reset_scope: Option<ResetScope>,
    pub concurrency: Option<usize>,
    pub pretty: Option<bool>,
}

/// Contents of `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub profiles: BTreeMap<String, ProfileConfig>,
}

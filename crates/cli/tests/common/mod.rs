//! Shared test utilities for grafana-backup integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (tokens, base URLs).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `GRAFANA_API_TOKEN` is set to "test-token" unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `grafana-backup` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `GRAFANA_API_TOKEN` is set to a dummy value to satisfy config validation.
/// - Other `GRAFANA_*` variables are cleared to avoid leakage from the host.
pub fn grafana_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-backup");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("GRAFANA_API_TOKEN", "test-token");

    cmd.env_remove("GRAFANA_URL")
        .env_remove("GRAFANA_PROFILE")
        .env_remove("GRAFANA_CONFIG_PATH")
        .env_remove("GRAFANA_TIMEOUT")
        .env_remove("GRAFANA_SKIP_VERIFY")
        .env_remove("GRAFANA_BACKUP_DIR")
        .env_remove("GRAFANA_BACKUP_MODE")
        .env_remove("GRAFANA_RESET_SCOPE")
        .env_remove("GRAFANA_CONCURRENCY");

    cmd
}

/// Returns a hermetic `grafana-backup` command pointed at `base_url`.
#[allow(dead_code)]
pub fn grafana_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = grafana_cmd();
    cmd.env("GRAFANA_URL", base_url);
    cmd
}

//! Centralized constants for the grafana-backup workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// API Paths
// =============================================================================

/// Search endpoint enumerating dashboards and folders.
pub const SEARCH_PATH: &str = "/api/search";

/// Prefix of the dashboard detail endpoint; the resource URI is appended.
pub const DASHBOARD_DETAIL_PATH: &str = "/api/dashboards";

// =============================================================================
// Backup Defaults
// =============================================================================

/// Default directory backup files are written to.
pub const DEFAULT_BACKUP_DIR: &str = "grafana";

/// Default number of dashboard fetches in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Upper bound for the fetch concurrency.
pub const MAX_CONCURRENCY: usize = 64;

/// Extension appended to every backup file name.
pub const BACKUP_FILE_EXTENSION: &str = "json";

//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants and partial backup failures to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use grafana_client::ClientError;
use grafana_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for grafana-backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - configuration problems or unclassified failures.
    GeneralError = 1,

    /// Authentication failure - the token was rejected (HTTP 401).
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Resource not found (HTTP 404).
    NotFound = 4,

    /// Permission denied - the token lacks access (HTTP 403).
    PermissionDenied = 6,

    /// Service unavailable - HTTP 502, 503 or 504.
    ServiceUnavailable = 8,

    /// Search succeeded but at least one resource could not be backed up.
    PartialFailure = 9,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_auth_error() {
            return ExitCode::AuthenticationFailed;
        }
        if err.is_permission_error() {
            return ExitCode::PermissionDenied;
        }
        if err.is_transport_error() {
            return ExitCode::ConnectionError;
        }

        match err.status() {
            Some(404) => ExitCode::NotFound,
            Some(502..=504) => ExitCode::ServiceUnavailable,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Raised by `backup` after the run completes with failed resources.
#[derive(Debug, Error)]
#[error("{failed} of {total} resources could not be backed up")]
pub struct PartialFailure {
    pub failed: usize,
    pub total: usize,
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if nothing in the chain is recognized.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<PartialFailure>().is_some() {
                return ExitCode::PartialFailure;
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::GeneralError;
            }
        }

        ExitCode::GeneralError
    }
}

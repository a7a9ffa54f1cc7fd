//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests touching the environment use `serial_test` plus the global test lock.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

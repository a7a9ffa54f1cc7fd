//! Validation tests for timeout and concurrency bounds.

use crate::constants::{MAX_CONCURRENCY, MAX_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use std::time::Duration;

fn base_loader() -> ConfigLoader {
    ConfigLoader::new()
        .with_base_url("http://localhost:3000".to_string())
        .with_api_token("test-token".to_string())
}

#[test]
fn test_zero_timeout_rejected() {
    let result = base_loader().with_timeout(Duration::from_secs(0)).build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_above_max_rejected() {
    let result = base_loader()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_at_max_accepted() {
    let config = base_loader()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS))
        .build()
        .unwrap();
    assert_eq!(config.connection.timeout.as_secs(), MAX_TIMEOUT_SECS);
}

#[test]
fn test_zero_concurrency_rejected() {
    let result = base_loader().with_concurrency(0).build();
    assert!(matches!(result, Err(ConfigError::InvalidConcurrency { .. })));
}

#[test]
fn test_concurrency_above_max_rejected() {
    let result = base_loader().with_concurrency(MAX_CONCURRENCY + 1).build();
    assert!(matches!(result, Err(ConfigError::InvalidConcurrency { .. })));
}

#[test]
fn test_invalid_base_url_rejected() {
    let result = ConfigLoader::new()
        .with_base_url("not a url".to_string())
        .with_api_token("test-token".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

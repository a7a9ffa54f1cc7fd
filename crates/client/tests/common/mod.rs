//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for testing the Grafana client against
//! wiremock servers.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

// Re-export test utilities from grafana-client
#[allow(unused_imports)]
pub use grafana_client::testing::load_fixture;

// Re-exports used via `use common::*;` in test files
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use grafana_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token every test request is sent with.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "glsa_test_token";

/// Build a [`grafana_client::GrafanaClient`] pointed at a mock server.
#[allow(dead_code)]
pub fn grafana_client(server: &MockServer) -> grafana_client::GrafanaClient {
    grafana_client::GrafanaClient::builder()
        .base_url(server.uri())
        .api_token(secrecy::SecretString::new(TEST_TOKEN.to_string().into()))
        .build()
        .expect("client should build")
}

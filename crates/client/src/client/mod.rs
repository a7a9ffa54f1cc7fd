//! Main Grafana API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `search`: Search method
//! - `dashboards`: Dashboard detail method
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Writing backups to disk
//!
//! # Invariants
//! - `base_url` never ends with a slash
//! - Every request carries `Authorization: Bearer <token>`
//! - Requests are attempted once; failures are returned to the caller

pub mod builder;

mod dashboards;
mod search;

use secrecy::{ExposeSecret, SecretString};

use crate::metrics::MetricsCollector;

/// Grafana HTTP API client.
///
/// Holds the pooled HTTP client, the normalized base URL and the bearer
/// token. It is read-only after construction, so concurrent fetches share
/// it behind an `Arc`.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use grafana_client::GrafanaClient;
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("http://localhost:3000".to_string())
///     .api_token(SecretString::new("glsa_token".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: SecretString,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Metrics collector attached at build time, if any.
    pub fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }

    pub(crate) fn token(&self) -> &str {
        self.api_token.expose_secret()
    }
}

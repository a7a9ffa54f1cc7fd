//! Grafana HTTP API client.
//!
//! This crate provides a typed client for the two Grafana endpoints a
//! dashboard backup needs: `/api/search` and `/api/dashboards/<uri>`. It
//! authenticates with a static bearer token and also carries the
//! template-variable sanitizer applied to fetched dashboards.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    DashboardDocument, ResourceDescriptor, SearchKind, SearchOptions, reset_template_variables,
};

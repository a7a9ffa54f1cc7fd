//! CLI command implementations.

pub mod backup;
pub mod completions;
pub mod search;

use anyhow::{Context, Result};
use grafana_client::{GrafanaClient, MetricsCollector};
use grafana_config::Config;

/// Build a client from a validated config.
///
/// The attached [`MetricsCollector`] records only when `metrics_enabled`,
/// which is set when an exporter was installed with `--metrics-bind`.
pub fn build_client_from_config(config: &Config, metrics_enabled: bool) -> Result<GrafanaClient> {
    let metrics = if metrics_enabled {
        MetricsCollector::new()
    } else {
        MetricsCollector::disabled()
    };
    GrafanaClient::builder()
        .from_config(config)
        .metrics(metrics)
        .build()
        .context("Failed to build Grafana client")
}

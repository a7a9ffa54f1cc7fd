//! Search endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ResourceDescriptor, SearchOptions};
use grafana_config::constants::SEARCH_PATH;

/// Enumerate dashboards and folders through `GET /api/search`.
///
/// The body must be a JSON array; each element becomes one
/// [`ResourceDescriptor`]. Filters in `options` are passed through as query
/// parameters only when set.
pub async fn search(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    options: &SearchOptions,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<ResourceDescriptor>> {
    let url = format!("{}{}", base_url, SEARCH_PATH);

    let mut builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .header("Accept", "application/json");

    let query_params = options.query_params();
    if !query_params.is_empty() {
        builder = builder.query(&query_params);
    }

    let response = send_request(builder, SEARCH_PATH, "GET", metrics).await?;
    let descriptors: Vec<ResourceDescriptor> =
        read_json(response, SEARCH_PATH, "ResourceDescriptor list", metrics).await?;

    debug!(count = descriptors.len(), "Search returned descriptors");
    Ok(descriptors)
}

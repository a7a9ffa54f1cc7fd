//! Dashboard detail endpoint.

use reqwest::Client;

use crate::endpoints::url_encoding::encode_resource_uri;
use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::DashboardDocument;
use grafana_config::constants::DASHBOARD_DETAIL_PATH;

/// Fetch one dashboard document through `GET /api/dashboards/<uri>`.
///
/// Metrics are labelled with the endpoint prefix rather than the full URI
/// to keep label cardinality bounded.
pub async fn get_dashboard(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    uri: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<DashboardDocument> {
    let url = format!(
        "{}{}/{}",
        base_url,
        DASHBOARD_DETAIL_PATH,
        encode_resource_uri(uri)?
    );

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .header("Accept", "application/json");

    let response = send_request(builder, DASHBOARD_DETAIL_PATH, "GET", metrics).await?;
    read_json(response, DASHBOARD_DETAIL_PATH, "DashboardDocument", metrics).await
}

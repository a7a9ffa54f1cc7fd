//! Dashboard API method for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::DashboardDocument;

impl GrafanaClient {
    /// Fetch the dashboard document for a search result URI such as `db/test`.
    pub async fn get_dashboard(&self, uri: &str) -> Result<DashboardDocument> {
        endpoints::get_dashboard(
            &self.http,
            &self.base_url,
            self.token(),
            uri,
            self.metrics.as_ref(),
        )
        .await
    }
}

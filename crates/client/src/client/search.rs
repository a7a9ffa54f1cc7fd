//! Search API method for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ResourceDescriptor, SearchOptions};

impl GrafanaClient {
    /// List dashboards and folders matching `options`.
    pub async fn search(&self, options: &SearchOptions) -> Result<Vec<ResourceDescriptor>> {
        endpoints::search(
            &self.http,
            &self.base_url,
            self.token(),
            options,
            self.metrics.as_ref(),
        )
        .await
    }
}

//! Target-related API endpoints

use reqwest::Url;
use tracing::debug;

use crate::DatastoreClient;
use crate::error::Result;

impl DatastoreClient {
    // =============================================================================
    // Target Management
    // =============================================================================

    /// URL of a single target: `/api/target/{group}/{target}`
    pub fn target_url(&self, group: &str, target: &str) -> Result<Url> {
        self.endpoint(&["api", "target", group, target])
    }

    /// Add a host to a target group
    ///
    /// The group is created by the server if it does not exist yet.
    ///
    /// # Arguments
    /// * `group` - Target group name
    /// * `target` - Host to register, usually `host:port`
    ///
    /// # Example
    /// ```no_run
    /// # use sd_populate_client::DatastoreClient;
    /// # async fn example() -> sd_populate_client::Result<()> {
    /// let client = DatastoreClient::new("localhost:8080")?;
    /// client.add_target("node", "10.0.10.2:9100").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_target(&self, group: &str, target: &str) -> Result<()> {
        let url = self.target_url(group, target)?;
        debug!("POST {}", url);
        let response = self.client.post(url).send().await?;

        self.handle_empty_response(response).await
    }

    /// Remove a host from a target group
    pub async fn remove_target(&self, group: &str, target: &str) -> Result<()> {
        let url = self.target_url(group, target)?;
        debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;

        self.handle_empty_response(response).await
    }
}

//! API trait
//!
//! The subset of the service-discovery API the populator depends on. Code
//! that publishes target groups is written against this trait so it can run
//! against a recording double in tests.

use async_trait::async_trait;
use reqwest::Url;
use sd_populate_core::Labels;
use sd_populate_core::dto::DebugTargets;

use crate::DatastoreClient;
use crate::error::Result;

#[async_trait]
pub trait DatastoreApi: Send + Sync {
    /// URL that `add_target` posts to
    fn target_url(&self, group: &str, target: &str) -> Result<Url>;

    /// URL that `update_labels` posts to
    fn labels_url(&self, group: &str, labels: &Labels) -> Result<Url>;

    /// Register one host in a target group
    async fn add_target(&self, group: &str, target: &str) -> Result<()>;

    /// Attach labels to a target group
    async fn update_labels(&self, group: &str, labels: &Labels) -> Result<()>;

    /// Check that the server is up
    async fn health(&self) -> Result<()>;

    /// Fetch the server's view of every target group, keyed by name
    async fn debug_targets(&self) -> Result<DebugTargets>;
}

#[async_trait]
impl DatastoreApi for DatastoreClient {
    fn target_url(&self, group: &str, target: &str) -> Result<Url> {
        DatastoreClient::target_url(self, group, target)
    }

    fn labels_url(&self, group: &str, labels: &Labels) -> Result<Url> {
        DatastoreClient::labels_url(self, group, labels)
    }

    async fn add_target(&self, group: &str, target: &str) -> Result<()> {
        DatastoreClient::add_target(self, group, target).await
    }

    async fn update_labels(&self, group: &str, labels: &Labels) -> Result<()> {
        DatastoreClient::update_labels(self, group, labels).await
    }

    async fn health(&self) -> Result<()> {
        DatastoreClient::health(self).await
    }

    async fn debug_targets(&self) -> Result<DebugTargets> {
        DatastoreClient::debug_targets(self).await
    }
}

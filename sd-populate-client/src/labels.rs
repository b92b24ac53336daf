//! Label-related API endpoints

use reqwest::Url;
use sd_populate_core::Labels;
use tracing::debug;

use crate::DatastoreClient;
use crate::error::Result;

/// Build the query string for a label update
///
/// Every label becomes one `labels=name=value` pair, in label-name order.
/// Names and values are percent-encoded, so `&`, `#` or spaces inside them
/// cannot split the query. An empty label set gives an empty string.
pub fn labels_query(labels: &Labels) -> String {
    labels
        .iter()
        .map(|(name, value)| {
            format!(
                "labels={}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

impl DatastoreClient {
    // =============================================================================
    // Label Management
    // =============================================================================

    /// URL of a label update: `/api/labels/update/{group}?labels=k=v&...`
    ///
    /// The query is always present, even when `labels` is empty.
    pub fn labels_url(&self, group: &str, labels: &Labels) -> Result<Url> {
        let mut url = self.endpoint(&["api", "labels", "update", group])?;
        url.set_query(Some(&labels_query(labels)));
        Ok(url)
    }

    /// Attach labels to a target group
    ///
    /// All labels are sent in a single request.
    ///
    /// # Arguments
    /// * `group` - Target group name
    /// * `labels` - Labels to set on the group
    pub async fn update_labels(&self, group: &str, labels: &Labels) -> Result<()> {
        let url = self.labels_url(group, labels)?;
        debug!("POST {}", url);
        let response = self.client.post(url).send().await?;

        self.handle_empty_response(response).await
    }

    /// Remove one label from a target group
    pub async fn remove_label(&self, group: &str, label: &str) -> Result<()> {
        let url = self.endpoint(&["api", "labels", "update", group, label])?;
        debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;

        self.handle_empty_response(response).await
    }
}

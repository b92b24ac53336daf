//! Service-discovery HTTP client
//!
//! A small, typed HTTP client for the service-discovery server's target
//! and label API.
//!
//! # Example
//!
//! ```no_run
//! use sd_populate_client::DatastoreClient;
//!
//! #[tokio::main]
//! async fn main() -> sd_populate_client::Result<()> {
//!     let client = DatastoreClient::new("localhost:8080")?;
//!
//!     client.add_target("node", "10.0.10.2:9100").await?;
//!     Ok(())
//! }
//! ```

mod api;
pub mod error;
mod labels;
mod status;
mod targets;

// Re-export commonly used types
pub use api::DatastoreApi;
pub use error::{ClientError, Result};
pub use labels::labels_query;
pub use reqwest::Url;
pub use sd_populate_core::dto::{DebugTargets, TargetGroupEntry};

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Behaviour of the underlying HTTP client, fixed at construction
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Emit reqwest connection traces (read/write of every request)
    pub verbose: bool,

    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

/// HTTP client for the service-discovery API
///
/// Endpoints are grouped as:
/// - Targets: add and remove a host from a target group
/// - Labels: set and remove labels on a target group
/// - Status: health check and the server's view of all target groups
#[derive(Debug, Clone)]
pub struct DatastoreClient {
    /// Base URL of the API (e.g., "http://localhost:8080/")
    base_url: Url,
    /// HTTP client instance
    client: Client,
}

impl DatastoreClient {
    /// Create a new client with default settings
    ///
    /// # Arguments
    /// * `host` - API host, either `host[:port]` or a full `http(s)://` URL
    pub fn new(host: &str) -> Result<Self> {
        Self::with_config(host, &ClientConfig::default())
    }

    /// Create a new client from an explicit configuration
    ///
    /// # Example
    /// ```
    /// use sd_populate_client::{ClientConfig, DatastoreClient};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig {
    ///     verbose: true,
    ///     timeout: Some(Duration::from_secs(10)),
    /// };
    /// let client = DatastoreClient::with_config("localhost:8080", &config).unwrap();
    /// assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    /// ```
    pub fn with_config(host: &str, config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().connection_verbose(config.verbose);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Self::with_client(host, builder.build()?)
    }

    /// Create a new client around a custom reqwest client
    pub fn with_client(host: &str, client: Client) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(host)?,
            client,
        })
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL by appending path segments to the base URL
    ///
    /// Each segment is percent-encoded on its own, so a `/` inside a group
    /// or target name cannot change the route. `.` and `..` would be
    /// dropped or resolved by the URL parser and are rejected instead.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ClientError::InvalidUrl(format!(
                "path segment '{}' is not allowed",
                segment
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is not needed
    ///
    /// The server answers writes with a plain `OK`; only the status matters.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

/// Turn an API host into a base URL
///
/// A bare `host[:port]` is served over plain HTTP.
fn parse_base_url(host: &str) -> Result<Url> {
    let host = host.trim();
    if host.is_empty() {
        return Err(ClientError::InvalidUrl("API host cannot be empty".to_string()));
    }

    let raw = if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    };

    let url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))?;
    if url.host_str().is_none() {
        return Err(ClientError::InvalidUrl(format!("{}: missing host", raw)));
    }

    Ok(url)
}

#[cfg(test)]
pub(crate) mod test_server;

//! Health and inspection endpoints

use sd_populate_core::dto::{DebugTargets, TargetGroupEntry};
use tracing::debug;

use crate::DatastoreClient;
use crate::error::Result;

impl DatastoreClient {
    /// Check that the server answers `GET /health` with a 2xx status
    pub async fn health(&self) -> Result<()> {
        let url = self.endpoint(&["health"])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        self.handle_empty_response(response).await
    }

    /// List all target groups in Prometheus HTTP SD format
    pub async fn list_targets(&self) -> Result<Vec<TargetGroupEntry>> {
        let url = self.endpoint(&["api", "targets"])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// List all target groups keyed by group name
    pub async fn debug_targets(&self) -> Result<DebugTargets> {
        let url = self.endpoint(&["debug_targets"])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::DatastoreClient;
    use crate::error::ClientError;
    use crate::test_server::TestServer;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_ok() {
        let server = TestServer::start(StatusCode::OK).await;
        let client = DatastoreClient::new(&server.host()).unwrap();

        client.health().await.unwrap();
    }

    #[tokio::test]
    async fn test_health_failure() {
        let server = TestServer::start(StatusCode::SERVICE_UNAVAILABLE).await;
        let client = DatastoreClient::new(&server.host()).unwrap();

        let err = client.health().await.unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_list_targets() {
        let server = TestServer::start(StatusCode::OK)
            .await
            .with_targets(json!([
                {"targets": ["h1", "h2"], "labels": {"env": "prod"}}
            ]));
        let client = DatastoreClient::new(&server.host()).unwrap();

        let entries = client.list_targets().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].targets, vec!["h1".to_string(), "h2".to_string()]);
    }

    #[tokio::test]
    async fn test_debug_targets() {
        let server = TestServer::start(StatusCode::OK)
            .await
            .with_debug_targets(json!({
                "targets": {"g1": {"targets": ["h1"], "labels": {"env": "prod"}}}
            }));
        let client = DatastoreClient::new(&server.host()).unwrap();

        let debug = client.debug_targets().await.unwrap();
        let g1 = debug.group("g1").unwrap();
        assert_eq!(g1.targets, vec!["h1".to_string()]);
        assert_eq!(g1.labels.get("env"), Some(&"prod".to_string()));
    }

    #[tokio::test]
    async fn test_debug_targets_invalid_body() {
        let server = TestServer::start(StatusCode::OK)
            .await
            .with_debug_targets(json!("not an object"));
        let client = DatastoreClient::new(&server.host()).unwrap();

        let err = client.debug_targets().await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }
}

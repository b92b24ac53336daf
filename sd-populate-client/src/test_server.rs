//! In-process service-discovery server for client tests
//!
//! Records every write request it receives and answers with a fixed status.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    targets: Arc<Mutex<Value>>,
    debug_targets: Arc<Mutex<Value>>,
}

pub struct TestServer {
    addr: SocketAddr,
    state: ServerState,
}

impl TestServer {
    /// Start a server that answers every request with `status`
    pub async fn start(status: StatusCode) -> Self {
        let state = ServerState {
            status,
            requests: Arc::new(Mutex::new(Vec::new())),
            targets: Arc::new(Mutex::new(Value::Array(Vec::new()))),
            debug_targets: Arc::new(Mutex::new(serde_json::json!({ "targets": {} }))),
        };

        let app = Router::new()
            .route("/health", get(health))
            .route("/api/targets", get(list_targets))
            .route("/debug_targets", get(debug_targets))
            .fallback(record)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    /// Address of a port nothing listens on
    pub async fn unused_host() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().to_string()
    }

    pub fn with_targets(self, targets: Value) -> Self {
        *self.state.targets.lock().unwrap() = targets;
        self
    }

    pub fn with_debug_targets(self, debug_targets: Value) -> Self {
        *self.state.debug_targets.lock().unwrap() = debug_targets;
        self
    }

    pub fn host(&self) -> String {
        self.addr.to_string()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn health(State(state): State<ServerState>) -> (StatusCode, &'static str) {
    (state.status, "OK\n")
}

async fn list_targets(State(state): State<ServerState>) -> Response {
    let body = state.targets.lock().unwrap().clone();
    (state.status, Json(body)).into_response()
}

async fn debug_targets(State(state): State<ServerState>) -> Response {
    let body = state.debug_targets.lock().unwrap().clone();
    (state.status, Json(body)).into_response()
}

async fn record(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
    body: String,
) -> (StatusCode, &'static str) {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body,
    });
    (state.status, "OK\n")
}

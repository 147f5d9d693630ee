//! Mock migration server for client integration tests.
//!
//! Serves stubbed responses keyed by method and path, and records every
//! request it receives so tests can assert on exactly what the client sent.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;

/// A request observed by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    content_type: String,
    body: String,
}

#[derive(Clone, Default)]
struct MockState {
    stubs: Arc<Mutex<HashMap<(String, String), Stub>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Mock HTTP server bound to an ephemeral local port.
///
/// Unstubbed routes answer 404, so tests can exercise failure paths without
/// extra setup.
pub struct MockServer {
    addr: SocketAddr,
    state: MockState,
}

impl MockServer {
    /// Bind to `127.0.0.1:0` and start serving in a background task.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    /// Base URL for a client pointed at this server, `/api` prefix included.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Stub a JSON response for `method` + `path`.
    pub fn stub_json(&self, method: &str, path: &str, status: u16, body: Value) {
        self.stub_raw(method, path, status, "application/json", body.to_string());
    }

    /// Stub an arbitrary response body and content type.
    pub fn stub_raw(&self, method: &str, path: &str, status: u16, content_type: &str, body: String) {
        self.state.stubs.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            Stub {
                status: StatusCode::from_u16(status).unwrap(),
                content_type: content_type.to_string(),
                body,
            },
        );
    }

    /// All requests observed so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Number of requests observed for `method` + `path`.
    pub fn hits(&self, method: &str, path: &str) -> usize {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.method == method && request.path == path)
            .count()
    }
}

async fn handle(State(state): State<MockState>, request: Request) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        content_type,
    });

    let stub = state.stubs.lock().unwrap().get(&(method, path)).cloned();
    match stub {
        Some(stub) => Response::builder()
            .status(stub.status)
            .header(CONTENT_TYPE, stub.content_type)
            .body(Body::from(stub.body))
            .unwrap(),
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::empty())
            .unwrap(),
    }
}

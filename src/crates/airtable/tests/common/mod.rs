//! In-process mock of the Airtable row-listing endpoint.

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// What the mock saw for one request.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Running mock backend.
pub struct MockBackend {
    pub api_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockBackend {
    /// Requests received so far.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().expect("mock state poisoned").clone()
    }
}

/// Start a mock that answers every request with `status` and `body`.
pub async fn spawn_backend(status: StatusCode, body: impl Into<String>) -> MockBackend {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body: body.into(),
        requests: requests.clone(),
    };

    let app = Router::new().fallback(handle).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock listener");
    let addr = listener.local_addr().expect("Failed to read mock address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock server failed");
    });

    MockBackend {
        api_url: format!("http://{}/v0", addr),
        requests,
    }
}

async fn handle(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
    };

    state
        .requests
        .lock()
        .expect("mock state poisoned")
        .push(CapturedRequest {
            path: uri.path().to_string(),
            query,
            authorization: header_text(header::AUTHORIZATION),
            content_type: header_text(header::CONTENT_TYPE),
        });

    (state.status, state.body.clone())
}

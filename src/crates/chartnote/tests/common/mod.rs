//! Common test utilities: a mock Airtable backend and a binary runner.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Router;
use std::process::Output;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    hits: Arc<AtomicUsize>,
}

/// Running mock backend.
pub struct MockBackend {
    pub api_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Number of requests received.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Start a mock that answers every request with `status` and `body`.
pub async fn spawn_backend(status: StatusCode, body: impl Into<String>) -> MockBackend {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = MockState {
        status,
        body: body.into(),
        hits: hits.clone(),
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
        hits,
    }
}

async fn handle(State(state): State<MockState>) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (state.status, state.body.clone())
}

const CONFIG_VARS: [&str; 5] = [
    "AIRTABLE_PERSONAL_ACCESS_TOKEN",
    "AIRTABLE_BASE_ID",
    "AIRTABLE_TABLE_NAME",
    "AIRTABLE_API_URL",
    "AIRTABLE_SORT_FIELD",
];

/// Run the `chartnote` binary with only the given Airtable variables set.
///
/// Runs from an empty directory so no stray `.env` file is picked up.
pub async fn run_chartnote(env: &[(&str, &str)]) -> Output {
    let workdir = TempDir::new().expect("Failed to create temp dir");

    let mut command = tokio::process::Command::new(env!("CARGO_BIN_EXE_chartnote"));
    command.current_dir(workdir.path()).env("RUST_LOG", "off");
    for var in CONFIG_VARS {
        command.env_remove(var);
    }
    for (key, value) in env {
        command.env(key, value);
    }

    command
        .output()
        .await
        .expect("Failed to execute chartnote binary")
}

/// Environment pointing the binary at `backend`.
pub fn backend_env(backend: &MockBackend) -> Vec<(&'static str, String)> {
    vec![
        ("AIRTABLE_PERSONAL_ACCESS_TOKEN", "pat-test".to_string()),
        ("AIRTABLE_BASE_ID", "appTest".to_string()),
        ("AIRTABLE_TABLE_NAME", "Chart Notes".to_string()),
        ("AIRTABLE_API_URL", backend.api_url.clone()),
    ]
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

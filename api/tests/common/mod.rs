#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use api::{app, AppState};
use axum::{
    body::Body,
    extract::{Query, State},
    http::{Method, Request, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use chatgpt_proxy::{ChatGptService, Config};
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "sk-test-key";

pub type Calls = Arc<Mutex<Vec<Vec<(String, String)>>>>;

/// Stand-in for the external API. Records the query pairs of every call and
/// answers with a fixed status and body.
pub struct StubUpstream {
    calls: Calls,
    pub url: String,
}

#[derive(Clone)]
struct StubState {
    calls: Calls,
    status: StatusCode,
    body: Arc<String>,
    delay: Duration,
}

impl StubUpstream {
    pub async fn spawn(status: StatusCode, body: &str) -> Self {
        Self::spawn_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn spawn_with_delay(status: StatusCode, body: &str, delay: Duration) -> Self {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            calls: calls.clone(),
            status,
            body: Arc::new(body.to_string()),
            delay,
        };
        let router = Router::new()
            .route("/answers", get(stub_answer))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            calls,
            url: format!("http://{addr}/answers"),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn only_call(&self) -> Vec<(String, String)> {
        let calls = self.calls.lock().unwrap();
        assert_eq!(calls.len(), 1, "expected exactly one outbound call");
        calls[0].clone()
    }
}

async fn stub_answer(
    State(state): State<StubState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, String) {
    state.calls.lock().unwrap().push(pairs);
    tokio::time::sleep(state.delay).await;
    (state.status, state.body.as_ref().clone())
}

pub fn create_test_app(api_url: &str, timeout_secs: u64) -> Router {
    let config = Config::from_lookup(|key| match key {
        "CHAT_GPT_API_URL" => Some(api_url.to_string()),
        "API_KEY" => Some(TEST_API_KEY.to_string()),
        "UPSTREAM_TIMEOUT_SECS" => Some(timeout_secs.to_string()),
        _ => None,
    })
    .unwrap();
    app(AppState::new(ChatGptService::new(&config).unwrap()))
}

pub fn ask_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri("/ask_chat_gpt")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

//! Fake backend for API contract tests.
//!
//! An axum router on an ephemeral port that records each request and answers
//! with whatever the test's handler returns. Replies may be delayed per
//! request, so slow answers do not hold up fast ones.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(status: u16, body: &str) -> Self {
        Self { status, body: body.to_string(), delay: Duration::ZERO }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Handler = Arc<dyn Fn(&RecordedRequest) -> Reply + Send + Sync>;

#[derive(Clone)]
struct BackendState {
    handler: Handler,
    requests: mpsc::UnboundedSender<RecordedRequest>,
}

pub struct FakeBackend {
    pub base: String,
    requests: mpsc::UnboundedReceiver<RecordedRequest>,
}

impl FakeBackend {
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&RecordedRequest) -> Reply + Send + Sync + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let state = BackendState { handler: Arc::new(handler), requests: tx };
        let app = Router::new()
            .route("/search", get(record_and_reply))
            .route("/posts", post(record_and_reply))
            .route("/posts/{id}", get(record_and_reply))
            .route("/feedback", post(record_and_reply))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move { axum::serve(listener, app).await.expect("serve fake backend") });

        Self { base: format!("http://{}", addr), requests: rx }
    }

    /// Serve the same reply to every request
    pub async fn always(reply: Reply) -> Self {
        Self::start(move |_| reply.clone()).await
    }

    pub async fn next_request(&mut self) -> RecordedRequest {
        self.requests.recv().await.expect("fake backend recorded a request")
    }
}

async fn record_and_reply(
    State(state): State<BackendState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let request = RecordedRequest {
        method: method.to_string(),
        target: uri.path_and_query().map(|pq| pq.as_str().to_string()).unwrap_or_default(),
        headers: headers
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_str().unwrap_or_default().to_string()))
            .collect(),
        body,
    };
    let reply = (state.handler)(&request);
    let _ = state.requests.send(request);

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    let status = StatusCode::from_u16(reply.status).expect("valid status code");
    (status, [(CONTENT_TYPE, "application/json")], reply.body).into_response()
}

//! # Fake REST API
//!
//! An in-process HTTP server for tests. It binds `127.0.0.1:0`, answers each
//! `(method, path)` with a scripted reply, and records every request it sees so
//! tests can assert on headers, bodies and call counts.
//!
//! Only compiled for this crate's unit tests or with the `testing` feature.
//!
//! ```rust,ignore
//! let api = FakeApi::start().await?;
//! api.respond("GET", "/lessons", 200, json!([{ "_id": "1" }]));
//!
//! let context = ApiContext::new(api.base_url(), Some("abc".into()));
//! // ... run an actor against `context` ...
//!
//! assert_eq!(api.count("GET", "/lessons"), 1);
//! assert_eq!(api.requests()[0].authorization.as_deref(), Some("Bearer abc"));
//! ```

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

/// One request as the fake server received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct Reply {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

#[derive(Default)]
struct Inner {
    routes: HashMap<(String, String), Reply>,
    log: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<Inner>>;

fn lock(shared: &Shared) -> MutexGuard<'_, Inner> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A running fake API. The server stops when this is dropped.
pub struct FakeApi {
    base_url: String,
    shared: Shared,
    handle: JoinHandle<()>,
}

impl FakeApi {
    pub async fn start() -> std::io::Result<Self> {
        let shared: Shared = Arc::new(Mutex::new(Inner::default()));
        let router = Router::new().fallback(serve_scripted).with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url,
            shared,
            handle,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Scripts the JSON reply for `method path`. Later calls replace earlier ones.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.script(method, path, status, body.to_string(), None);
    }

    /// Like [`FakeApi::respond`] but with a body that need not be JSON.
    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.script(method, path, status, body.to_string(), None);
    }

    /// Like [`FakeApi::respond`] but holds the reply back for `delay`.
    pub fn respond_after(
        &self,
        method: &str,
        path: &str,
        status: u16,
        body: Value,
        delay: Duration,
    ) {
        self.script(method, path, status, body.to_string(), Some(delay));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.shared).log.clone()
    }

    /// How many `method path` requests have been received so far.
    pub fn count(&self, method: &str, path: &str) -> usize {
        lock(&self.shared)
            .log
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn script(
        &self,
        method: &str,
        path: &str,
        status: u16,
        body: String,
        delay: Option<Duration>,
    ) {
        lock(&self.shared).routes.insert(
            (method.to_uppercase(), path.to_string()),
            Reply {
                status,
                body,
                delay,
            },
        );
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_scripted(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let recorded = RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).ok(),
    };

    let reply = {
        let mut inner = lock(&shared);
        inner.log.push(recorded);
        let key = (method.to_string(), path);
        let scripted = inner.routes.get(&key).cloned();
        scripted
    };
    let reply = reply.unwrap_or(Reply {
        status: 404,
        body: r#"{"message":"Not found"}"#.to_string(),
        delay: None,
    });

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

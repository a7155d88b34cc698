//! In-process HTTP stand-in for the workflow engine.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

/// A canned answer served by [`StubEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl StubResponse {
    /// `200 OK` with a JSON body
    pub fn json<T: Serialize>(value: &T) -> Self {
        Self::json_with_status(200, value)
    }

    /// A value that fails to serialize turns into a `500` naming the error.
    pub fn json_with_status<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                content_type: "application/json",
                body,
            },
            Err(e) => Self::text(500, format!("stub body failed to serialize: {}", e)),
        }
    }

    /// `200 OK` with an empty body
    pub fn empty() -> Self {
        Self::text(200, "")
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.into(),
        }
    }

    pub fn xml(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "application/xml",
            body: body.into(),
        }
    }

    /// An error answer shaped like the engine's: `{"message": ...}`
    pub fn error(status: u16, message: &str) -> Self {
        Self::json_with_status(status, &serde_json::json!({ "message": message }))
    }
}

/// A request received by [`StubEngine`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path as sent, still percent-encoded
    pub path: String,
    /// Raw query string
    pub query: Option<String>,
    /// Header names are lowercase
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Decoded query parameters, in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match &self.query {
            Some(query) => url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// First decoded value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query_pairs()
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// A query parameter parsed as JSON (`filters`, `sorts`).
    pub fn query_json(&self, name: &str) -> Option<Value> {
        self.query_param(name)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// The body parsed as JSON, `Null` when empty or not JSON.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Default)]
struct StubState {
    routes: Mutex<HashMap<(String, String), VecDeque<StubResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubState {
    /// Pop queued answers in order; the last one stays and repeats.
    fn next_response(&self, method: &str, path: &str) -> Option<StubResponse> {
        let mut routes = self.routes.lock();
        let queue = routes.get_mut(&(method.to_string(), path.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

/// An HTTP server on a random local port that records every request and
/// answers from a table of canned responses.
///
/// Unrouted requests get `404 {"message": "no stub for ..."}`.
///
/// ```ignore
/// let engine = StubEngine::start().await;
/// engine.respond("POST", "/workflow-api/rpc/get-process-status",
///     StubResponse::json(&json!({"status": "Running"})));
///
/// let client = WorkflowApiClient::builder().base_url(engine.base_url()).build()?;
/// ```
pub struct StubEngine {
    addr: SocketAddr,
    state: Arc<StubState>,
    server: JoinHandle<()>,
}

impl StubEngine {
    /// Bind to `127.0.0.1:0` and start serving.
    pub async fn start() -> std::io::Result<Self> {
        let state = Arc::new(StubState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Stub engine stopped: {}", e);
            }
        });
        debug!(%addr, "Stub engine listening");

        Ok(Self {
            addr,
            state,
            server,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Queue an answer for `method path`. Queued answers are served in order
    /// and the last one keeps being served.
    pub fn respond(&self, method: &str, path: &str, response: StubResponse) {
        self.state
            .routes
            .lock()
            .entry((method.to_ascii_uppercase(), path.to_string()))
            .or_default()
            .push_back(response);
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.lock().last().cloned()
    }

    /// Requests received for one path.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().len()
    }
}

impl Drop for StubEngine {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = RecordedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect(),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    debug!(method = %recorded.method, path = %recorded.path, "Stub engine received request");

    let response = state
        .next_response(&recorded.method, &recorded.path)
        .unwrap_or_else(|| {
            StubResponse::error(
                404,
                &format!("no stub for {} {}", recorded.method, recorded.path),
            )
        });
    state.requests.lock().push(recorded);

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, response.content_type)],
        response.body,
    )
        .into_response()
}

//! A mock WMS endpoint for HTTP-level tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::debug;

/// What the mock answers to every request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl MockResponse {
    pub fn xml(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/xml",
            body: body.to_string(),
        }
    }

    pub fn html(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/html",
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: String::new(),
        }
    }
}

struct MockState {
    response: MockResponse,
    queries: Mutex<Vec<String>>,
}

async fn respond(State(state): State<Arc<MockState>>, uri: Uri) -> Response {
    let query = uri.query().unwrap_or_default().to_string();
    debug!(path = %uri.path(), query = %query, "Mock WMS request");
    if let Ok(mut queries) = state.queries.lock() {
        queries.push(query);
    }

    let status = StatusCode::from_u16(state.response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, state.response.content_type)],
        state.response.body.clone(),
    )
        .into_response()
}

/// HTTP server on 127.0.0.1 with an ephemeral port that answers every
/// request with the same [`MockResponse`]. Stopped when dropped.
pub struct MockWmsServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockWmsServer {
    pub async fn start(response: MockResponse) -> Self {
        let state = Arc::new(MockState {
            response,
            queries: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(respond).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock WMS server");
        let addr = listener.local_addr().expect("Mock WMS server has no address");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Serve a capabilities document as `text/xml`.
    pub async fn capabilities(xml: &str) -> Self {
        Self::start(MockResponse::xml(xml)).await
    }

    /// Endpoint URL, `http://127.0.0.1:<port>/wms`.
    pub fn url(&self) -> String {
        format!("http://{}/wms", self.addr)
    }

    /// Query strings of all requests received so far.
    pub fn queries(&self) -> Vec<String> {
        self.state
            .queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.queries().len()
    }
}

impl Drop for MockWmsServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A URL on a local port nothing listens on.
pub fn unreachable_url() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to reserve a local port");
    let port = listener
        .local_addr()
        .expect("Reserved port has no address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{}/wms", port)
}

//! Mock image provider for integration tests
//!
//! Answers any POST with a canned JSON body and optionally serves
//! image bytes under `/files/{name}` for download tests.

use std::net::SocketAddr;
use std::sync::{Arc, RwLock};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use tokio_util::sync::CancellationToken;

pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    status: StatusCode,
    response: RwLock<serde_json::Value>,
    image_bytes: Vec<u8>,
}

impl MockProvider {
    /// Start a mock that answers every generation call with `response`
    pub async fn start(response: serde_json::Value) -> anyhow::Result<Self> {
        Self::start_inner(StatusCode::OK, response, Vec::new()).await
    }

    /// Start a mock that fails every generation call with `status`
    pub async fn start_with_status(status: u16, response: serde_json::Value) -> anyhow::Result<Self> {
        Self::start_inner(StatusCode::from_u16(status)?, response, Vec::new()).await
    }

    /// Start a mock that also serves `image_bytes` at `/files/{name}`
    pub async fn start_with_image(
        response: serde_json::Value,
        image_bytes: Vec<u8>,
    ) -> anyhow::Result<Self> {
        Self::start_inner(StatusCode::OK, response, image_bytes).await
    }

    async fn start_inner(
        status: StatusCode,
        response: serde_json::Value,
        image_bytes: Vec<u8>,
    ) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            status,
            response: RwLock::new(response),
            image_bytes,
        });

        let app = Router::new()
            .route("/files/{name}", get(serve_image))
            .fallback(generate)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(token.cancelled_owned())
                .await;
        });

        Ok(Self {
            addr,
            shutdown,
            state,
        })
    }

    /// Absolute URL for a path on this mock
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Swap the canned response; used when the response must reference
    /// the mock's own address
    pub fn set_response(&self, response: serde_json::Value) {
        *self.state.response.write().unwrap() = response;
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn generate(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    let response = state.response.read().unwrap().clone();
    (state.status, axum::Json(response))
}

async fn serve_image(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/png")],
        state.image_bytes.clone(),
    )
}

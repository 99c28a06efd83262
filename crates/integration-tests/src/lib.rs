//! Harness for driving the real payment server over a loopback socket.

use std::sync::Arc;

use payment_server::{AppState, PAYMENT_PATH, build_router};
use request_auth::{RequestVerifier, Secret};
use url::Url;

pub const TEST_SECRET: &str = "integration-test-shared-secret";

pub struct TestPaymentServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestPaymentServer {
    pub async fn start(verifier: RequestVerifier) -> Self {
        let app = build_router(AppState {
            verifier: Arc::new(verifier),
            max_body_bytes: 64 * 1024,
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("test payment listener should bind");
        let bind_addr = listener
            .local_addr()
            .expect("test payment listener local address should exist");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("test payment server should run");
        });

        Self {
            base_url: format!("http://{bind_addr}"),
            handle,
        }
    }

    pub fn payment_url(&self) -> Url {
        Url::parse(&format!("{}{PAYMENT_PATH}", self.base_url))
            .expect("payment url should parse")
    }
}

impl Drop for TestPaymentServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn test_secret() -> Secret {
    Secret::try_from(TEST_SECRET).expect("test secret should be non-empty")
}

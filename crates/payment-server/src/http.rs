use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use axum::routing::{get, post};
use axum::{Router, middleware};
use request_auth::RequestVerifier;
use serde::Serialize;
use tracing::info;

use crate::config::ServerConfig;

mod errors;
mod observability;
mod signature;


pub const PAYMENT_PATH: &str = "/api/v1/payment";

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<RequestVerifier>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            verifier: Arc::new(config.verifier()),
            max_body_bytes: config.max_body_bytes,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    message: &'static str,
}

pub fn build_router(app_state: AppState) -> Router {
    let public_routes = Router::new().route("/healthz", get(healthz));

    let signed_routes = Router::new()
        .route(PAYMENT_PATH, post(accept_payment))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            signature::require_signature,
        ))
        .with_state(app_state);

    public_routes
        .merge(signed_routes)
        .layer(middleware::from_fn(
            observability::request_observability_middleware,
        ))
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Only reached once the signature middleware has accepted the request.
async fn accept_payment(
    Extension(context): Extension<observability::RequestContext>,
) -> Json<MessageResponse> {
    info!(request_id = %context.request_id, "signed payment request accepted");
    Json(MessageResponse {
        message: "Success! Signature is valid.",
    })
}

use axum::body::Body;
use axum::extract::{OriginalUri, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use request_auth::VerificationOutcome;
use tracing::{info, warn};

use super::AppState;
use super::errors::{
    invalid_signature_response, missing_signature_headers_response, payload_too_large_response,
    unreadable_body_response,
};
use super::observability::RequestContext;

/// Buffers the raw body, verifies the request signature over it and hands the
/// untouched bytes to the inner handler when the signature is valid.
pub(super) async fn require_signature(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let (parts, body) = req.into_parts();
    let request_id = parts
        .extensions
        .get::<RequestContext>()
        .map(|context| context.request_id.clone())
        .unwrap_or_default();

    let body = match Limited::new(body, state.max_body_bytes).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) if err.is::<LengthLimitError>() => {
            warn!(
                request_id = %request_id,
                max_body_bytes = state.max_body_bytes,
                "signed request body exceeds limit"
            );
            return payload_too_large_response();
        }
        Err(err) => {
            warn!(request_id = %request_id, error = %err, "failed to read signed request body");
            return unreadable_body_response();
        }
    };

    // Routers nested under a prefix see a stripped URI; the signer signed the full one.
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map_or(&parts.uri, |original| &original.0);
    let path_and_query = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);
    let method = parts.method.as_str();

    let outcome = state
        .verifier
        .verify_request(method, &path_and_query, &parts.headers, &body);

    match outcome {
        VerificationOutcome::Valid => {
            info!(
                request_id = %request_id,
                method,
                path = %path_and_query,
                outcome = outcome.as_str(),
                "request signature verified"
            );
        }
        VerificationOutcome::MissingHeaders => {
            warn!(
                request_id = %request_id,
                method,
                path = %path_and_query,
                outcome = outcome.as_str(),
                "request rejected: signature headers missing"
            );
            return missing_signature_headers_response();
        }
        VerificationOutcome::Invalid => {
            warn!(
                request_id = %request_id,
                method,
                path = %path_and_query,
                body_bytes = body.len(),
                outcome = outcome.as_str(),
                "request rejected: signature invalid"
            );
            return invalid_signature_response();
        }
    }

    next.run(Request::from_parts(parts, Body::from(body))).await
}

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::MessageResponse;

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    error: &'static str,
}

pub(super) fn missing_signature_headers_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Missing required signature headers",
        }),
    )
        .into_response()
}

// Same body for every failure cause.
pub(super) fn invalid_signature_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(MessageResponse {
            message: "Forbidden. Invalid signature.",
        }),
    )
        .into_response()
}

pub(super) fn payload_too_large_response() -> Response {
    (
        StatusCode::PAYLOAD_TOO_LARGE,
        Json(ErrorResponse {
            error: "Request body too large",
        }),
    )
        .into_response()
}

pub(super) fn unreadable_body_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Request body could not be read",
        }),
    )
        .into_response()
}

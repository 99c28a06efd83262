use std::fmt;

use request_auth::{RequestSigner, SIGNATURE_HEADER, TIMESTAMP_HEADER, request_uri};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

/// Serialized compactly with `amount` before `currency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRequest {
    pub amount: u64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "Response JSON: {value}"),
            Self::Text(text) => write!(f, "Response Text: {text}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl PaymentResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to serialize payment payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("payment request transport unavailable: {message}")]
    TransportUnavailable { message: String },
    #[error("failed to read payment response body: {message}")]
    ResponseUnreadable { message: String },
}

#[derive(Debug, Clone)]
pub struct PaymentClient {
    endpoint: Url,
    signed_uri: String,
    signer: RequestSigner,
    http_client: reqwest::Client,
}

impl PaymentClient {
    pub fn new(endpoint: Url, signer: RequestSigner, http_client: reqwest::Client) -> Self {
        let signed_uri = request_uri(&endpoint);
        Self {
            endpoint,
            signed_uri,
            signer,
            http_client,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn send_payment(
        &self,
        payment: &PaymentRequest,
    ) -> Result<PaymentResponse, ClientError> {
        let body = serde_json::to_vec(payment)?;
        self.send_signed(Method::POST, body).await
    }

    /// Signs `body` and sends exactly those bytes; nothing may re-serialize
    /// the payload between here and the wire.
    pub async fn send_signed(
        &self,
        method: Method,
        body: Vec<u8>,
    ) -> Result<PaymentResponse, ClientError> {
        let signed = self
            .signer
            .prepare_headers(method.as_str(), &self.signed_uri, &body);
        debug!(
            method = %method,
            uri = %self.signed_uri,
            timestamp = %signed.timestamp,
            body_bytes = body.len(),
            "signed outgoing request"
        );

        let response = self
            .http_client
            .request(method, self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, signed.signature.into_string())
            .header(TIMESTAMP_HEADER, signed.timestamp)
            .body(body)
            .send()
            .await
            .map_err(|err| ClientError::TransportUnavailable {
                message: err.to_string(),
            })?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ClientError::ResponseUnreadable {
                message: err.to_string(),
            })?;

        info!(status, response_bytes = bytes.len(), "payment endpoint responded");

        Ok(PaymentResponse {
            status,
            body: parse_response_body(&bytes),
        })
    }
}

fn parse_response_body(bytes: &[u8]) -> ResponseBody {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => ResponseBody::Json(value),
        Err(_) => ResponseBody::Text(String::from_utf8_lossy(bytes).into_owned()),
    }
}

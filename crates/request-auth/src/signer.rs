use chrono::{DateTime, Utc};
use url::Url;

use crate::canonical;
use crate::mac::{self, Signature};
use crate::secret::Secret;
use crate::timestamp::format_timestamp;

/// Values to attach to one outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub signature: Signature,
    pub timestamp: String,
}

#[derive(Debug, Clone)]
pub struct RequestSigner {
    secret: Secret,
}

impl RequestSigner {
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    /// Signs with the current wall-clock time. `body` must be the exact bytes
    /// that will be transmitted.
    pub fn prepare_headers(&self, method: &str, uri: &str, body: &[u8]) -> SignedHeaders {
        self.prepare_headers_at(method, uri, body, Utc::now())
    }

    pub fn prepare_headers_at(
        &self,
        method: &str,
        uri: &str,
        body: &[u8],
        now: DateTime<Utc>,
    ) -> SignedHeaders {
        let timestamp = format_timestamp(now);
        let signing_string = canonical::build(method, uri, &timestamp, body);
        let signature = mac::sign(&self.secret, &signing_string);

        SignedHeaders {
            signature,
            timestamp,
        }
    }
}

pub fn prepare_headers(secret: &Secret, method: &str, uri: &str, body: &[u8]) -> SignedHeaders {
    RequestSigner::new(secret.clone()).prepare_headers(method, uri, body)
}

/// The part of `endpoint` that is signed: its path, plus `?query` when the
/// URL carries one. Scheme, host, port and fragment are dropped.
pub fn request_uri(endpoint: &Url) -> String {
    match endpoint.query() {
        Some(query) => format!("{}?{query}", endpoint.path()),
        None => endpoint.path().to_string(),
    }
}

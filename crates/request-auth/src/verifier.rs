use chrono::{DateTime, Utc};
use http::HeaderMap;
use tracing::debug;

use crate::canonical;
use crate::mac;
use crate::secret::Secret;
use crate::timestamp::is_fresh;
use crate::{SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Terminal result of checking one inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Signature or timestamp header absent or empty; no MAC was computed.
    MissingHeaders,
    Valid,
    Invalid,
}

impl VerificationOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingHeaders => "missing_headers",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }

    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

#[derive(Debug, Clone)]
pub struct RequestVerifier {
    secret: Secret,
    max_clock_skew_seconds: Option<u64>,
}

enum HeaderField<'a> {
    Missing,
    Unreadable,
    Value(&'a str),
}

impl RequestVerifier {
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            max_clock_skew_seconds: None,
        }
    }

    /// Additionally rejects correctly signed requests whose timestamp is more
    /// than `seconds` away from the verifier's clock.
    pub fn with_max_clock_skew(mut self, seconds: u64) -> Self {
        self.max_clock_skew_seconds = Some(seconds);
        self
    }

    pub fn max_clock_skew_seconds(&self) -> Option<u64> {
        self.max_clock_skew_seconds
    }

    /// Checks a request as received. `path_and_query` must come from the
    /// request line and `body` must be the raw, unparsed payload.
    pub fn verify_request(
        &self,
        method: &str,
        path_and_query: &str,
        headers: &HeaderMap,
        body: &[u8],
    ) -> VerificationOutcome {
        let signature = header_field(headers, SIGNATURE_HEADER);
        let timestamp = header_field(headers, TIMESTAMP_HEADER);

        match (signature, timestamp) {
            (HeaderField::Missing, _) | (_, HeaderField::Missing) => {
                VerificationOutcome::MissingHeaders
            }
            (HeaderField::Value(signature), HeaderField::Value(timestamp)) => self.verify_parts(
                method,
                path_and_query,
                Some(signature),
                Some(timestamp),
                body,
            ),
            _ => VerificationOutcome::Invalid,
        }
    }

    pub fn verify_parts(
        &self,
        method: &str,
        uri: &str,
        signature: Option<&str>,
        timestamp: Option<&str>,
        body: &[u8],
    ) -> VerificationOutcome {
        self.verify_parts_at(method, uri, signature, timestamp, body, Utc::now())
    }

    pub fn verify_parts_at(
        &self,
        method: &str,
        uri: &str,
        signature: Option<&str>,
        timestamp: Option<&str>,
        body: &[u8],
        now: DateTime<Utc>,
    ) -> VerificationOutcome {
        let (Some(signature), Some(timestamp)) = (
            signature.filter(|value| !value.is_empty()),
            timestamp.filter(|value| !value.is_empty()),
        ) else {
            return VerificationOutcome::MissingHeaders;
        };

        let signing_string = canonical::build(method, uri, timestamp, body);
        if !mac::verify(&self.secret, &signing_string, signature) {
            return VerificationOutcome::Invalid;
        }

        if let Some(max_skew) = self.max_clock_skew_seconds
            && !is_fresh(timestamp, now, max_skew)
        {
            debug!(timestamp, max_skew, "signed request timestamp outside allowed skew");
            return VerificationOutcome::Invalid;
        }

        VerificationOutcome::Valid
    }
}

fn header_field<'a>(headers: &'a HeaderMap, name: &str) -> HeaderField<'a> {
    match headers.get(name) {
        None => HeaderField::Missing,
        Some(value) if value.is_empty() => HeaderField::Missing,
        Some(value) => match value.to_str() {
            Ok(value) => HeaderField::Value(value),
            Err(_) => HeaderField::Unreadable,
        },
    }
}

//! Shared-secret HMAC-SHA256 request signing.
//!
//! A signer canonicalizes `(method, uri, timestamp, body)` into a signing
//! string, MACs it with the shared secret and ships the base64 digest in the
//! [`SIGNATURE_HEADER`] next to the [`TIMESTAMP_HEADER`]. The verifier
//! rebuilds the same string from the request it received and compares the
//! digests in constant time.

pub mod canonical;
pub mod config;
mod config_env;
pub mod mac;
pub mod secret;
pub mod signer;
pub mod timestamp;
pub mod verifier;

pub use canonical::SigningString;
pub use mac::Signature;
pub use secret::{Secret, SecretError};
pub use signer::{RequestSigner, SignedHeaders, prepare_headers, request_uri};
pub use verifier::{RequestVerifier, VerificationOutcome};

/// Carries the base64 HMAC of the signing string.
pub const SIGNATURE_HEADER: &str = "me-noway-signature";
/// Carries the `YYYY-MM-DDTHH:MM:SSZ` timestamp that was signed.
pub const TIMESTAMP_HEADER: &str = "x-timestamp";

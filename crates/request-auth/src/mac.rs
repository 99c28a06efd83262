use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::canonical::SigningString;
use crate::secret::Secret;

type HmacSha256 = Hmac<Sha256>;

/// Base64 (standard alphabet, padded) encoding of a 32-byte HMAC-SHA256 digest.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    pub const ENCODED_LEN: usize = 44;

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Only an 8-char prefix is rendered.
impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(8).collect();
        write!(f, "Signature({prefix}…)")
    }
}

pub fn sign(secret: &Secret, signing_string: &SigningString) -> Signature {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts shared secret key of any size");
    mac.update(signing_string.as_bytes());

    let digest = mac.finalize().into_bytes();
    Signature(STANDARD.encode(digest))
}

/// Recomputes the signature and compares it against `candidate` without
/// short-circuiting on the first differing byte. Anything that is not the
/// exact expected encoding, malformed base64 included, is a mismatch.
pub fn verify(secret: &Secret, signing_string: &SigningString, candidate: &str) -> bool {
    let expected = sign(secret, signing_string);
    constant_time_eq(expected.as_str(), candidate)
}

pub fn constant_time_eq(left: &str, right: &str) -> bool {
    if left.len() != right.len() {
        return false;
    }

    left.as_bytes().ct_eq(right.as_bytes()).into()
}

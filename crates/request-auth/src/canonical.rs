use std::fmt;

const FIELD_SEPARATOR: u8 = b'\n';

/// The exact bytes fed to the MAC.
///
/// Layout is `method \n uri \n timestamp \n body` with no trailing newline.
/// An empty body still keeps the separator in front of it.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningString(Vec<u8>);

impl SigningString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningString")
            .field(&String::from_utf8_lossy(&self.0))
            .finish()
    }
}

/// Builds the signing string for one request.
///
/// `uri` must be the path-and-query of the request only, and `body` the raw
/// bytes as they travel on the wire.
pub fn build(method: &str, uri: &str, timestamp: &str, body: &[u8]) -> SigningString {
    let mut buf = Vec::with_capacity(method.len() + uri.len() + timestamp.len() + body.len() + 3);
    buf.extend_from_slice(method.as_bytes());
    buf.push(FIELD_SEPARATOR);
    buf.extend_from_slice(uri.as_bytes());
    buf.push(FIELD_SEPARATOR);
    buf.extend_from_slice(timestamp.as_bytes());
    buf.push(FIELD_SEPARATOR);
    buf.extend_from_slice(body);

    SigningString(buf)
}

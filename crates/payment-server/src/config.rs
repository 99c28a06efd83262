use request_auth::config::{
    ConfigError, optional_u64_env, parse_u64_env, shared_secret_from_env,
};
use request_auth::{RequestVerifier, Secret};

pub const BIND_ADDR_ENV: &str = "PAYMENT_SERVER_BIND_ADDR";
pub const MAX_BODY_BYTES_ENV: &str = "PAYMENT_SERVER_MAX_BODY_BYTES";
pub const MAX_CLOCK_SKEW_ENV: &str = "REQUEST_MAX_CLOCK_SKEW_SECONDS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub shared_secret: Secret,
    pub max_body_bytes: usize,
    /// `None` leaves timestamps unchecked.
    pub max_clock_skew_seconds: Option<u64>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_body_bytes = parse_u64_env(MAX_BODY_BYTES_ENV, DEFAULT_MAX_BODY_BYTES)?;

        Ok(Self {
            bind_addr: std::env::var(BIND_ADDR_ENV)
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            shared_secret: shared_secret_from_env()?,
            max_body_bytes: usize::try_from(max_body_bytes).unwrap_or(usize::MAX),
            max_clock_skew_seconds: optional_u64_env(MAX_CLOCK_SKEW_ENV)?,
        })
    }

    pub fn verifier(&self) -> RequestVerifier {
        let verifier = RequestVerifier::new(self.shared_secret.clone());
        match self.max_clock_skew_seconds {
            Some(seconds) => verifier.with_max_clock_skew(seconds),
            None => verifier,
        }
    }
}

#[cfg(test)]
mod tests;

use request_auth::config::{
    ConfigError, api_endpoint_from_env, parse_u64_env, shared_secret_from_env,
};
use request_auth::Secret;
use url::Url;

pub const TIMEOUT_SECONDS_ENV: &str = "PAYMENT_CLIENT_TIMEOUT_SECONDS";

const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub shared_secret: Secret,
    pub timeout_seconds: u64,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: api_endpoint_from_env()?,
            shared_secret: shared_secret_from_env()?,
            timeout_seconds: parse_u64_env(TIMEOUT_SECONDS_ENV, DEFAULT_TIMEOUT_SECONDS)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use request_auth::config::{API_ENDPOINT_ENV, ConfigError, SECRET_KEY_ENV};
    use serial_test::serial;

    use super::{ClientConfig, TIMEOUT_SECONDS_ENV};

    fn set_env(key: &str, value: &str) {
        // SAFETY: env-mutating tests are serialized with `#[serial]`.
        unsafe { std::env::set_var(key, value) };
    }

    fn clear_env() {
        for key in [API_ENDPOINT_ENV, SECRET_KEY_ENV, TIMEOUT_SECONDS_ENV] {
            // SAFETY: env-mutating tests are serialized with `#[serial]`.
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn loads_endpoint_and_secret() {
        clear_env();
        set_env(API_ENDPOINT_ENV, "https://payments.example.com/api/v1/payment");
        set_env(SECRET_KEY_ENV, "topsecret");

        let config = ClientConfig::from_env().expect("config should load");

        assert_eq!(config.endpoint.host_str(), Some("payments.example.com"));
        assert_eq!(config.shared_secret.as_bytes(), b"topsecret");
        assert_eq!(config.timeout_seconds, 15);

        clear_env();
    }

    #[test]
    #[serial]
    fn endpoint_is_checked_before_secret() {
        clear_env();

        let err = ClientConfig::from_env().expect_err("missing endpoint must fail");

        assert!(matches!(err, ConfigError::MissingVar(key) if key == API_ENDPOINT_ENV));
    }

    #[test]
    #[serial]
    fn missing_secret_is_fatal() {
        clear_env();
        set_env(API_ENDPOINT_ENV, "https://payments.example.com/api/v1/payment");

        let err = ClientConfig::from_env().expect_err("missing secret must fail");

        assert!(matches!(err, ConfigError::MissingVar(key) if key == SECRET_KEY_ENV));

        clear_env();
    }
}

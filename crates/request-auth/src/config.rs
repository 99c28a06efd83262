use thiserror::Error;
use url::Url;

use crate::config_env::{optional_trimmed_env, require_env};
use crate::secret::{Secret, SecretError};

pub use crate::config_env::{optional_u64_env, parse_u64_env};

pub const SECRET_KEY_ENV: &str = "MY_SECRET_KEY";
pub const API_ENDPOINT_ENV: &str = "API_ENDPOINT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    MissingVar(String),
    #[error("env var {0} must not be empty")]
    EmptyVar(String),
    #[error("invalid integer in env var {0}")]
    ParseInt(String),
    #[error("invalid URL in env var {key}: {message}")]
    InvalidUrl { key: String, message: String },
    #[error("failed to load .env file: {0}")]
    Dotenv(String),
}

/// Loads `.env` from the working directory or its parents. A missing file is
/// fine; an unreadable or malformed one is not.
pub fn load_dotenv() -> Result<(), ConfigError> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::Dotenv(err.to_string())),
    }
}

pub fn shared_secret_from_env() -> Result<Secret, ConfigError> {
    let raw = require_env(SECRET_KEY_ENV)?;
    Secret::try_from(raw).map_err(|err| match err {
        SecretError::Empty => ConfigError::EmptyVar(SECRET_KEY_ENV.to_string()),
    })
}

pub fn api_endpoint_from_env() -> Result<Url, ConfigError> {
    let raw = optional_trimmed_env(API_ENDPOINT_ENV)
        .ok_or_else(|| ConfigError::MissingVar(API_ENDPOINT_ENV.to_string()))?;
    parse_endpoint(API_ENDPOINT_ENV, &raw)
}

pub fn parse_endpoint(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidUrl {
        key: key.to_string(),
        message,
    };

    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("endpoint has no host".to_string()));
    }

    Ok(url)
}

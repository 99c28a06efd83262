use request_auth::config::{ConfigError, SECRET_KEY_ENV};
use serial_test::serial;

use super::{BIND_ADDR_ENV, MAX_BODY_BYTES_ENV, MAX_CLOCK_SKEW_ENV, ServerConfig};

fn set_env(key: &str, value: &str) {
    // SAFETY: env-mutating tests are serialized with `#[serial]`.
    unsafe { std::env::set_var(key, value) };
}

fn clear_env() {
    for key in [
        SECRET_KEY_ENV,
        BIND_ADDR_ENV,
        MAX_BODY_BYTES_ENV,
        MAX_CLOCK_SKEW_ENV,
    ] {
        // SAFETY: env-mutating tests are serialized with `#[serial]`.
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
#[serial]
fn defaults_apply_when_only_secret_is_set() {
    clear_env();
    set_env(SECRET_KEY_ENV, "topsecret");

    let config = ServerConfig::from_env().expect("config should load");

    assert_eq!(config.bind_addr, "127.0.0.1:5000");
    assert_eq!(config.max_body_bytes, 1024 * 1024);
    assert_eq!(config.max_clock_skew_seconds, None);
    assert_eq!(config.verifier().max_clock_skew_seconds(), None);

    clear_env();
}

#[test]
#[serial]
fn missing_secret_is_fatal() {
    clear_env();

    let err = ServerConfig::from_env().expect_err("secret is required");

    assert!(matches!(err, ConfigError::MissingVar(key) if key == SECRET_KEY_ENV));
}

#[test]
#[serial]
fn overrides_are_parsed() {
    clear_env();
    set_env(SECRET_KEY_ENV, "topsecret");
    set_env(BIND_ADDR_ENV, "0.0.0.0:8080");
    set_env(MAX_BODY_BYTES_ENV, "2048");
    set_env(MAX_CLOCK_SKEW_ENV, "300");

    let config = ServerConfig::from_env().expect("config should load");

    assert_eq!(config.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.max_body_bytes, 2048);
    assert_eq!(config.verifier().max_clock_skew_seconds(), Some(300));

    clear_env();
}

#[test]
#[serial]
fn invalid_skew_is_rejected() {
    clear_env();
    set_env(SECRET_KEY_ENV, "topsecret");
    set_env(MAX_CLOCK_SKEW_ENV, "soon");

    let err = ServerConfig::from_env().expect_err("invalid skew must fail");

    assert!(matches!(err, ConfigError::ParseInt(key) if key == MAX_CLOCK_SKEW_ENV));

    clear_env();
}

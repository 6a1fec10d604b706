//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = ColloquyConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn missing_api_key_is_not_an_error() {
    let mut config = ColloquyConfig::default();
    config.api.api_key = String::new();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_model() {
    let mut config = ColloquyConfig::default();
    config.api.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.model"));
}

#[test]
fn catches_non_http_endpoint() {
    let mut config = ColloquyConfig::default();
    config.api.endpoint = "ftp://example.com/chat".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.endpoint"));
}

#[test]
fn plain_http_endpoint_is_allowed() {
    let mut config = ColloquyConfig::default();
    config.api.endpoint = "http://127.0.0.1:8080/v1/chat/completions".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_timeout_out_of_range() {
    let mut config = ColloquyConfig::default();
    config.api.timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.timeout_secs = 0 is out of range [1, 600]"));

    config.api.timeout_secs = 601;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.timeout_secs"));
}

#[test]
fn catches_connect_timeout_out_of_range() {
    let mut config = ColloquyConfig::default();
    config.api.connect_timeout_secs = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.connect_timeout_secs"));
}

#[test]
fn collects_all_errors() {
    let mut config = ColloquyConfig::default();
    config.api.model = String::new();
    config.api.timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.model"));
    assert!(err.contains("api.timeout_secs"));
    assert!(err.contains("; "));
}

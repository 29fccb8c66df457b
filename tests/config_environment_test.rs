// ABOUTME: Integration tests for environment configuration and logging configuration
// ABOUTME: Validates defaults, overrides, and parse failures for every supported variable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use unit_converter_server::config::{Environment, ServerConfig};
use unit_converter_server::logging::{LogFormat, LoggingConfig};

const SERVER_VARS: [&str; 6] = [
    "HOST",
    "PORT",
    "SECRET_KEY",
    "ENVIRONMENT",
    "COOKIE_SECURE",
    "MAX_BODY_BYTES",
];

const LOGGING_VARS: [&str; 5] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "SERVICE_NAME",
];

fn clear_env() {
    for var in SERVER_VARS.iter().chain(LOGGING_VARS.iter()) {
        env::remove_var(var);
    }
}

// ============================================================================
// ServerConfig::from_env
// ============================================================================

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 5000);
    assert_eq!(config.bind_address(), "127.0.0.1:5000");
    assert_eq!(config.environment, Environment::Development);
    assert!(!config.cookie_secure);
    assert_eq!(config.max_body_bytes, 16 * 1024);
    assert!(config.secret_key_generated);
    assert_eq!(config.secret_key.as_bytes().len(), 24);
}

#[test]
#[serial]
fn test_overrides_from_env() {
    clear_env();
    env::set_var("HOST", "0.0.0.0");
    env::set_var("PORT", "8080");
    env::set_var("SECRET_KEY", "configured-secret");
    env::set_var("MAX_BODY_BYTES", "4096");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.secret_key.as_bytes(), b"configured-secret");
    assert!(!config.secret_key_generated);
    assert_eq!(config.max_body_bytes, 4096);

    clear_env();
}

#[test]
#[serial]
fn test_empty_secret_key_is_generated() {
    clear_env();
    env::set_var("SECRET_KEY", "");

    let config = ServerConfig::from_env().unwrap();
    assert!(config.secret_key_generated);
    assert!(!config.secret_key.as_bytes().is_empty());

    clear_env();
}

#[test]
#[serial]
fn test_production_enables_secure_cookies() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Production);
    assert!(config.cookie_secure);

    env::set_var("COOKIE_SECURE", "false");
    let config = ServerConfig::from_env().unwrap();
    assert!(!config.cookie_secure);

    clear_env();
}

#[test]
#[serial]
fn test_cookie_secure_override_in_development() {
    clear_env();
    env::set_var("COOKIE_SECURE", "TRUE");

    let config = ServerConfig::from_env().unwrap();
    assert!(config.cookie_secure);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_values_are_errors() {
    for (var, value) in [
        ("PORT", "not-a-port"),
        ("PORT", "70000"),
        ("COOKIE_SECURE", "maybe"),
        ("MAX_BODY_BYTES", "-1"),
        ("MAX_BODY_BYTES", "0"),
    ] {
        clear_env();
        env::set_var(var, value);
        let result = ServerConfig::from_env();
        assert!(result.is_err(), "{var}={value} should be rejected");
    }

    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_error_names_the_value() {
    clear_env();
    env::set_var("PORT", "abc");

    let error = ServerConfig::from_env().unwrap_err();
    assert!(format!("{error:#}").contains("Invalid PORT value 'abc'"));

    clear_env();
}

// ============================================================================
// LoggingConfig::from_env
// ============================================================================

#[test]
#[serial]
fn test_logging_defaults() {
    clear_env();

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
    assert!(!config.include_thread);
    assert_eq!(config.service_name, "unit-converter-server");
}

#[test]
#[serial]
fn test_logging_overrides() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("SERVICE_NAME", "converter-canary");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_thread);
    assert_eq!(config.service_name, "converter-canary");

    clear_env();
}

#[test]
#[serial]
fn test_logging_production_includes_location_and_thread() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert!(config.include_location);
    assert!(config.include_thread);

    clear_env();
}

// ABOUTME: Test utilities for building the application router with fixed settings
// ABOUTME: Provides a deterministic signing key so tests can forge and verify flash cookies

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use axum::Router;
use std::sync::Arc;
use unit_converter_server::{
    config::{SecretKey, ServerConfig},
    security::FlashSigner,
    server::{router_with_state, AppState},
};

/// Signing key shared by every test router
pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// Development config with the test signing key
#[must_use]
pub fn test_config() -> ServerConfig {
    ServerConfig::new(SecretKey::new(TEST_SECRET.to_vec()))
}

/// Flash signer matching [`test_router`]
#[must_use]
pub fn test_signer() -> FlashSigner {
    FlashSigner::new(&SecretKey::new(TEST_SECRET.to_vec()), false)
}

/// Full application router with every middleware layer
#[must_use]
pub fn test_router() -> Router {
    test_router_with_body_limit(test_config().max_body_bytes)
}

/// Shared state over the standard table with the test signing key
#[must_use]
pub fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(&test_config()))
}

/// Full application router with a custom request body limit
#[must_use]
pub fn test_router_with_body_limit(max_body_bytes: usize) -> Router {
    router_with_state(test_state(), max_body_bytes)
}

/// `name=value` part of a `Set-Cookie` header, ready to send back as `Cookie`
#[must_use]
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_owned()
}

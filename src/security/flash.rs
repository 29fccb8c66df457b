// ABOUTME: One-shot flash messages carried in an HMAC-SHA256 signed cookie
// ABOUTME: Messages are set on redirect, verified in constant time, and cleared when read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Signed flash messages
//!
//! Cookie value format: `base64url(message) "." hex(HMAC-SHA256(key, base64url(message)))`.
//! A cookie whose signature does not verify is treated as absent.

use crate::config::SecretKey;
use crate::constants::cookies::FLASH;
use crate::security::cookies::{get_cookie_value, SameSite, SecureCookieConfig};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use http::HeaderMap;
use ring::hmac;
use subtle::ConstantTimeEq;
use tracing::debug;

/// Seconds a flash message survives if the next page load never happens
const FLASH_MAX_AGE_SECS: u64 = 600;

/// Signs, verifies, and transports flash messages
#[derive(Debug, Clone)]
pub struct FlashSigner {
    key: hmac::Key,
    secure: bool,
}

impl FlashSigner {
    /// Signer keyed with the server secret; `secure` adds the `Secure` cookie attribute
    #[must_use]
    pub fn new(secret: &SecretKey, secure: bool) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes()),
            secure,
        }
    }

    /// Encode and sign a message into a cookie value
    #[must_use]
    pub fn sign(&self, message: &str) -> String {
        let payload = URL_SAFE_NO_PAD.encode(message.as_bytes());
        let signature = hex::encode(hmac::sign(&self.key, payload.as_bytes()).as_ref());
        format!("{payload}.{signature}")
    }

    /// Message inside a cookie value, if the signature is valid
    #[must_use]
    pub fn verify(&self, cookie_value: &str) -> Option<String> {
        let Some((payload, signature)) = cookie_value.split_once('.') else {
            debug!("Flash cookie is malformed");
            return None;
        };

        let expected = hex::encode(hmac::sign(&self.key, payload.as_bytes()).as_ref());
        if !bool::from(signature.as_bytes().ct_eq(expected.as_bytes())) {
            debug!("Flash cookie signature mismatch");
            return None;
        }

        URL_SAFE_NO_PAD
            .decode(payload)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Add a `Set-Cookie` header carrying `message`
    pub fn set(&self, headers: &mut HeaderMap, message: &str) {
        self.flash_attributes(SecureCookieConfig::new(
            FLASH.to_owned(),
            self.sign(message),
            FLASH_MAX_AGE_SECS,
        ))
        .apply(headers);
    }

    /// Read the pending message from the request and clear it on the response
    ///
    /// The cookie is cleared even when it fails verification.
    pub fn take(&self, request: &HeaderMap, response: &mut HeaderMap) -> Option<String> {
        let value = get_cookie_value(request, FLASH)?;
        self.flash_attributes(SecureCookieConfig::expired(FLASH.to_owned()))
            .apply(response);
        self.verify(&value)
    }

    /// `SameSite=Lax` plus the configured `Secure` flag
    fn flash_attributes(&self, cookie: SecureCookieConfig) -> SecureCookieConfig {
        cookie
            .with_secure(self.secure)
            .with_same_site(SameSite::Lax)
    }
}

// ABOUTME: Secure cookie helpers for building Set-Cookie values and reading request cookies
// ABOUTME: Defaults to HttpOnly, Secure, and SameSite=Strict unless relaxed explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};
use std::fmt;
use tracing::warn;

/// `SameSite` cookie attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// Never sent on cross-site requests
    Strict,
    /// Sent on top-level cross-site navigations
    Lax,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "Strict"),
            Self::Lax => write!(f, "Lax"),
        }
    }
}

/// Attributes of one `Set-Cookie` header
#[derive(Debug, Clone)]
pub struct SecureCookieConfig {
    /// Cookie name
    pub name: String,
    /// Cookie value, already encoded for the header
    pub value: String,
    /// Lifetime in seconds; `0` deletes the cookie
    pub max_age: u64,
    /// Hide the cookie from scripts
    pub http_only: bool,
    /// Only send over HTTPS
    pub secure: bool,
    /// Cross-site policy
    pub same_site: SameSite,
    /// Cookie path
    pub path: String,
}

impl SecureCookieConfig {
    /// Cookie with secure defaults
    #[must_use]
    pub fn new(name: String, value: String, max_age: u64) -> Self {
        Self {
            name,
            value,
            max_age,
            http_only: true,
            secure: true,
            same_site: SameSite::Strict,
            path: "/".to_owned(),
        }
    }

    /// Cookie that expires immediately
    #[must_use]
    pub fn expired(name: String) -> Self {
        Self::new(name, String::new(), 0)
    }

    /// Set the `Secure` attribute
    #[must_use]
    pub const fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Set the `SameSite` attribute
    #[must_use]
    pub const fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Render the `Set-Cookie` header value
    #[must_use]
    pub fn build(&self) -> String {
        let mut cookie = format!(
            "{}={}; Path={}; Max-Age={}; SameSite={}",
            self.name, self.value, self.path, self.max_age, self.same_site
        );
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// Append this cookie to response headers
    pub fn apply(&self, headers: &mut HeaderMap) {
        match HeaderValue::from_str(&self.build()) {
            Ok(value) => {
                headers.append(SET_COOKIE, value);
            }
            Err(e) => warn!(cookie = %self.name, "Cookie value is not a valid header: {e}"),
        }
    }
}

/// Value of the first cookie named `name` in the request `Cookie` headers
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
}

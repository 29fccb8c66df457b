// ABOUTME: Security module with cookie handling, signed flash messages, and response headers
// ABOUTME: Groups the browser-facing protections used by the converter page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// `Set-Cookie` construction and `Cookie` header parsing
pub mod cookies;

/// HMAC-signed one-shot flash messages
pub mod flash;

/// Security response headers
pub mod headers;

pub use cookies::{get_cookie_value, SameSite, SecureCookieConfig};
pub use flash::FlashSigner;
pub use headers::security_header_layers;

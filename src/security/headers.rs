// ABOUTME: Security response headers applied to every route
// ABOUTME: Content type sniffing, framing, referrer, and content security policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::Router;
use http::header::{
    CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
};
use http::HeaderValue;
use tower_http::set_header::SetResponseHeaderLayer;

/// Bootstrap stylesheet from the jsDelivr CDN plus the page's inline style and script
pub const CONTENT_SECURITY_POLICY_VALUE: &str = "default-src 'self'; \
     style-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; \
     script-src 'self' 'unsafe-inline'; \
     img-src 'self' data:; \
     form-action 'self'; \
     frame-ancestors 'none'; \
     base-uri 'none'";

/// Wrap a router so every response carries the security headers
///
/// Handlers that already set one of these headers keep their value.
pub fn security_header_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            REFERRER_POLICY,
            HeaderValue::from_static("same-origin"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY_VALUE),
        ))
}

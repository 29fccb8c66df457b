// ABOUTME: HTTP middleware for request tracing and context propagation
// ABOUTME: Provides request ID generation and span creation for structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Request ID and tracing span layers
pub mod tracing;

// Request tracing and context management
pub use self::tracing::{create_request_span, request_id, with_request_tracing};

// ABOUTME: Route module organization for the unit converter HTTP endpoints
// ABOUTME: HTML converter pages, the JSON conversion API, and health checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the unit converter server
//!
//! Each domain module owns its route definitions and thin handlers that
//! delegate to the conversion table and the page renderer.

/// JSON conversion API routes
pub mod api;
/// Server-rendered converter form routes
pub mod converter;
/// Health check and readiness routes
pub mod health;

/// JSON API route handlers
pub use api::ApiRoutes;
/// Converter page route handlers
pub use converter::ConverterRoutes;
/// Health check route handlers
pub use health::HealthRoutes;

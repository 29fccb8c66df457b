// ABOUTME: Main library entry point for the unit converter server
// ABOUTME: HTML form pages, a JSON API, and health checks over the converter-core engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Unit Converter Server
//!
//! A small web service that converts values between units of the same
//! measurement category (length, volume, mass, area, speed, time, data,
//! pressure, temperature, and angle).
//!
//! ## Features
//!
//! - **Converter page**: server-rendered form with a swap button and signed flash messages
//! - **JSON API**: category listing, unit listing, and conversion
//! - **Health checks**: `/health` and `/ready` for load balancers
//! - **Structured logging**: `tracing` with request ids on every request span
//!
//! ## Architecture
//!
//! - **converter-core** (workspace crate): the pure conversion engine
//! - **Routes**: thin axum handlers over the shared [`server::AppState`]
//! - **Pages**: template rendering with HTML escaping
//! - **Security**: signed flash cookies and response security headers
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use unit_converter_server::config::ServerConfig;
//! use unit_converter_server::server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     server::run(config).await
//! }
//! ```

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Application error types and JSON error responses
pub mod errors;

/// Logging configuration and initialization
pub mod logging;

/// Request tracing middleware
pub mod middleware;

/// Converter page rendering
pub mod pages;

/// HTTP route handlers
pub mod routes;

/// Flash cookies and security headers
pub mod security;

/// Router assembly and the serve loop
pub mod server;

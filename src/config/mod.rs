// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-only configuration with typed parsing and startup validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the unit converter server
//!
//! All settings come from environment variables; the server binary applies
//! command-line overrides on top. See [`environment::ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, SecretKey, ServerConfig};

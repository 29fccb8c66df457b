// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{defaults, env_vars};
use anyhow::{bail, Context, Result};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{info, warn};

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed behind a TLS terminator
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Flash cookie signing key; never printed
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Wrap existing key material
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Fresh random key of `len` bytes
    #[must_use]
    pub fn generate(len: usize) -> Self {
        let mut bytes = vec![0_u8; len];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Raw key bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED; {} bytes])", self.0.len())
    }
}

/// Main server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Flash cookie signing key
    pub secret_key: SecretKey,
    /// Whether `secret_key` was generated because `SECRET_KEY` was unset
    pub secret_key_generated: bool,
    /// Deployment environment
    pub environment: Environment,
    /// Add the `Secure` attribute to cookies
    pub cookie_secure: bool,
    /// Largest accepted request body, in bytes
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Development defaults with the given signing key
    #[must_use]
    pub fn new(secret_key: SecretKey) -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            port: defaults::PORT,
            secret_key,
            secret_key_generated: false,
            environment: Environment::Development,
            cookie_secure: false,
            max_body_bytes: defaults::MAX_BODY_BYTES,
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT`, `COOKIE_SECURE`, or `MAX_BODY_BYTES` cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let environment =
            Environment::from_str_or_default(&env_var_or(env_vars::ENVIRONMENT, "development"));

        let port = match env::var(env_vars::PORT) {
            Ok(value) => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value '{value}'"))?,
            Err(_) => defaults::PORT,
        };

        let cookie_secure = match env::var(env_vars::COOKIE_SECURE) {
            Ok(value) => value
                .trim()
                .to_lowercase()
                .parse::<bool>()
                .with_context(|| format!("Invalid COOKIE_SECURE value '{value}'"))?,
            Err(_) => environment.is_production(),
        };

        let max_body_bytes = match env::var(env_vars::MAX_BODY_BYTES) {
            Ok(value) => value
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid MAX_BODY_BYTES value '{value}'"))?,
            Err(_) => defaults::MAX_BODY_BYTES,
        };
        if max_body_bytes == 0 {
            bail!("MAX_BODY_BYTES must be greater than zero");
        }

        let (secret_key, secret_key_generated) = match env::var(env_vars::SECRET_KEY) {
            Ok(value) if !value.is_empty() => (SecretKey::new(value.into_bytes()), false),
            _ => {
                warn!(
                    "SECRET_KEY is not set; generated a random key, \
                     flash messages will not survive a restart"
                );
                (SecretKey::generate(defaults::GENERATED_SECRET_BYTES), true)
            }
        };

        Ok(Self {
            host: env_var_or(env_vars::HOST, defaults::HOST),
            port,
            secret_key,
            secret_key_generated,
            environment,
            cookie_secure,
            max_body_bytes,
        })
    }

    /// `host:port` to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Unit Converter Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Secure Cookies: {}\n\
             - Max Body Bytes: {}\n\
             - Secret Key: {}",
            self.bind_address(),
            self.environment,
            if self.cookie_secure {
                "Enabled"
            } else {
                "Disabled"
            },
            self.max_body_bytes,
            if self.secret_key_generated {
                "Generated"
            } else {
                "Configured"
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

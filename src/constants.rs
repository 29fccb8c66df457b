// ABOUTME: Application-wide constants for the unit converter server
// ABOUTME: Default network settings, cookie names, routes, and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared by configuration, routes, and the binaries

/// Service identification used in logs and health responses
pub mod service_names {
    /// Server binary and log service name
    pub const UNIT_CONVERTER_SERVER: &str = "unit-converter-server";
}

/// Defaults applied when an environment variable is unset
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "127.0.0.1";
    /// Bind port
    pub const PORT: u16 = 5000;
    /// Largest accepted request body, in bytes
    pub const MAX_BODY_BYTES: usize = 16 * 1024;
    /// Length of the generated signing key when `SECRET_KEY` is unset
    pub const GENERATED_SECRET_BYTES: usize = 24;
    /// Category shown on the landing page
    pub const CATEGORY: &str = "temperature";
}

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const PORT: &str = "PORT";
    /// Flash cookie signing key
    pub const SECRET_KEY: &str = "SECRET_KEY";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Force the `Secure` cookie attribute on or off
    pub const COOKIE_SECURE: &str = "COOKIE_SECURE";
    /// Request body limit
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
}

/// HTTP route paths
pub mod paths {
    /// Converter page
    pub const INDEX: &str = "/";
    /// Form conversion
    pub const CONVERT: &str = "/convert";
    /// Form swap
    pub const SWAP: &str = "/swap";
}

/// Cookie names
pub mod cookies {
    /// One-shot message shown on the next page load
    pub const FLASH: &str = "flash";
}

/// Messages shown to users after a rejected form submission
pub mod messages {
    /// Category not in the supported set
    pub const INVALID_CATEGORY: &str = "Invalid category.";
    /// Either unit is not part of the selected category
    pub const INVALID_UNITS: &str = "Invalid units for the selected category.";
    /// Value missing, non-numeric, or not finite
    pub const INVALID_NUMBER: &str = "Please enter a valid number.";
}

/// Request headers
pub mod headers {
    /// Correlation id header, generated when absent and echoed on the response
    pub const REQUEST_ID: &str = "x-request-id";
}

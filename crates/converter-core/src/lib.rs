// ABOUTME: Conversion engine for the unit converter server
// ABOUTME: Foundation crate with categories, unit tables, conversion, and value formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Converter Core
//!
//! Pure unit conversion for the unit converter server. Nothing here performs
//! I/O or logging; every operation reads an immutable [`ConversionTable`].
//!
//! ## Modules
//!
//! - **category**: the closed set of measurement categories
//! - **unit**: unit identity plus linear factors and affine formulas
//! - **table**: validated tables and per-category conversion
//! - **standard**: the built-in unit set
//! - **engine**: list/convert entry points over the standard table
//! - **format**: display formatting for results
//!
//! ## Example
//!
//! ```
//! use converter_core::{convert, ConversionError};
//!
//! assert_eq!(convert("temperature", "celsius", "kelvin", 0.0), Ok(273.15));
//! assert!(matches!(
//!     convert("length", "celsius", "km", 5.0),
//!     Err(ConversionError::UnknownUnit { .. })
//! ));
//! ```
//!
//! Round trips through the base unit (A → B → A) can drift by about 1e-9
//! relative to the input. Same-unit conversions are exact.

/// Measurement categories
pub mod category;

/// Public list/convert contract
pub mod engine;

/// Conversion and table errors
pub mod errors;

/// Result formatting
pub mod format;

/// Built-in unit definitions
pub mod standard;

/// Conversion tables
pub mod table;

/// Units, factors, and formulas
pub mod unit;

pub use category::Category;
pub use engine::{convert, list_categories, list_units, ConversionRequest};
pub use errors::{ConversionError, ConversionResult, TableError};
pub use format::format_value;
pub use table::{CategoryKind, CategoryTable, ConversionTable};
pub use unit::{AffineUnit, LinearUnit, TemperatureFormula, Unit};

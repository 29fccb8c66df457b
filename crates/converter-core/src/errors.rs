// ABOUTME: Error types for unit lookup, value validation, and table construction
// ABOUTME: Every failure is a local validation error; nothing here is retryable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure of a single conversion or unit listing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Category is not part of the supported set
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// Unit is not defined for the given category
    #[error("unknown unit '{unit}' for category '{category}'")]
    UnknownUnit {
        /// Category key the unit was looked up in
        category: String,
        /// Unit as supplied by the caller
        unit: String,
    },

    /// Input is missing, non-numeric, non-finite, or the result overflowed
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl ConversionError {
    /// Build an `UnknownUnit` error
    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::UnknownUnit {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Build an `InvalidValue` error
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue(reason.into())
    }
}

/// Rejection of a malformed conversion table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The same category appears twice
    #[error("category '{0}' is defined more than once")]
    DuplicateCategory(String),

    /// A category has no units at all
    #[error("category '{0}' has no units")]
    EmptyCategory(String),

    /// Two units in one category share a symbol or alias
    #[error("unit name '{name}' is used twice in category '{category}'")]
    DuplicateUnit {
        /// Category key
        category: String,
        /// Colliding symbol or alias
        name: String,
    },

    /// A linear factor is zero, negative, or not finite
    #[error("unit '{unit}' in category '{category}' has invalid factor {factor}")]
    InvalidFactor {
        /// Category key
        category: String,
        /// Offending unit symbol
        unit: String,
        /// Rendered factor
        factor: String,
    },

    /// A linear category must have exactly one unit with factor 1
    #[error("category '{category}' has {count} base units, expected exactly one")]
    BaseUnitCount {
        /// Category key
        category: String,
        /// Number of units with factor 1
        count: usize,
    },

    /// Affine categories need their base unit to map to itself
    #[error("category '{category}' has no identity base unit")]
    MissingAffineBase {
        /// Category key
        category: String,
    },
}

/// Result alias for conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

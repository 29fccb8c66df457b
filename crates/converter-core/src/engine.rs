// ABOUTME: Public conversion contract over the standard table
// ABOUTME: Category and unit listing plus the convert entry point and request type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::category::Category;
use crate::errors::ConversionResult;
use crate::table::ConversionTable;
use crate::unit::Unit;
use serde::{Deserialize, Serialize};

/// All supported categories, in display order
#[must_use]
pub fn list_categories() -> Vec<Category> {
    ConversionTable::standard().categories()
}

/// Units of a category, in display order
///
/// # Errors
///
/// Returns `UnknownCategory` if `category` is not a supported key
pub fn list_units(category: &str) -> ConversionResult<Vec<&'static Unit>> {
    ConversionTable::standard().list_units(category)
}

/// Convert `value` from `source_unit` to `target_unit` within `category`
///
/// # Errors
///
/// - `UnknownCategory` if `category` is not supported
/// - `InvalidValue` if `value` is not finite or the result overflows
/// - `UnknownUnit` if either unit is not part of `category`
pub fn convert(
    category: &str,
    source_unit: &str,
    target_unit: &str,
    value: f64,
) -> ConversionResult<f64> {
    ConversionTable::standard().convert(category, source_unit, target_unit, value)
}

/// One conversion to perform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Category key
    pub category: String,
    /// Unit the value is expressed in
    pub from: String,
    /// Unit to express the value in
    pub to: String,
    /// Value to convert
    pub value: f64,
}

impl ConversionRequest {
    /// Build a request
    pub fn new(
        category: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            category: category.into(),
            from: from.into(),
            to: to.into(),
            value,
        }
    }

    /// Run the request against a table
    ///
    /// # Errors
    ///
    /// Same as [`ConversionTable::convert`]
    pub fn execute(&self, table: &ConversionTable) -> ConversionResult<f64> {
        table.convert(&self.category, &self.from, &self.to, self.value)
    }

    /// The request with source and target exchanged and `value` replaced
    #[must_use]
    pub fn swapped(&self, value: f64) -> Self {
        Self {
            category: self.category.clone(),
            from: self.to.clone(),
            to: self.from.clone(),
            value,
        }
    }
}

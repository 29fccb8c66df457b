// ABOUTME: Immutable conversion tables keyed by category with linear/affine dispatch
// ABOUTME: Validates alternate tables and exposes lookup and conversion over one table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Conversion tables
//!
//! A [`ConversionTable`] is a plain value: build one with [`ConversionTable::new`]
//! (which validates it) or borrow the shared standard table with
//! [`ConversionTable::standard`]. There is no mutation API.
//!
//! Every conversion goes through the category base unit, so a table holds one
//! entry per unit rather than one per unit pair.

use crate::category::Category;
use crate::errors::{ConversionError, ConversionResult, TableError};
use crate::standard;
use crate::unit::{AffineUnit, LinearUnit, Unit};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Probe temperatures used to check that an affine base unit maps to itself
const AFFINE_BASE_PROBES: [f64; 3] = [-40.0, 0.0, 100.0];

static STANDARD_TABLE: OnceLock<ConversionTable> = OnceLock::new();

/// How the units of a category relate to its base unit
#[derive(Debug, Clone)]
pub enum CategoryKind {
    /// Pure ratios; the base unit has factor 1
    Linear(Vec<LinearUnit>),
    /// Offset formulas; `base` names the unit the formulas are relative to
    Affine {
        /// Symbol of the base unit
        base: &'static str,
        /// Units with their formulas
        units: Vec<AffineUnit>,
    },
}

/// All units of one category
#[derive(Debug, Clone)]
pub struct CategoryTable {
    category: Category,
    kind: CategoryKind,
}

impl CategoryTable {
    /// Category whose units scale linearly from the base unit
    #[must_use]
    pub const fn linear(category: Category, units: Vec<LinearUnit>) -> Self {
        Self {
            category,
            kind: CategoryKind::Linear(units),
        }
    }

    /// Category whose units need offset formulas
    #[must_use]
    pub const fn affine(category: Category, base: &'static str, units: Vec<AffineUnit>) -> Self {
        Self {
            category,
            kind: CategoryKind::Affine { base, units },
        }
    }

    /// Category this table describes
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Linear or affine unit definitions
    #[must_use]
    pub const fn kind(&self) -> &CategoryKind {
        &self.kind
    }

    /// Whether conversions need offset formulas
    #[must_use]
    pub const fn is_affine(&self) -> bool {
        matches!(self.kind, CategoryKind::Affine { .. })
    }

    /// Units in definition order
    #[must_use]
    pub fn units(&self) -> Vec<&Unit> {
        match &self.kind {
            CategoryKind::Linear(units) => units.iter().map(|u| &u.unit).collect(),
            CategoryKind::Affine { units, .. } => units.iter().map(|u| &u.unit).collect(),
        }
    }

    /// Units in display order (sorted by symbol)
    #[must_use]
    pub fn units_for_display(&self) -> Vec<&Unit> {
        let mut units = self.units();
        units.sort_by(|a, b| a.symbol.cmp(b.symbol));
        units
    }

    /// The unit every other unit is expressed against
    #[must_use]
    #[allow(clippy::float_cmp)] // base factor is written as the literal 1.0
    pub fn base_unit(&self) -> Option<&Unit> {
        match &self.kind {
            CategoryKind::Linear(units) => units
                .iter()
                .find(|u| u.factor == 1.0)
                .map(|u| &u.unit),
            CategoryKind::Affine { base, units } => units
                .iter()
                .find(|u| u.unit.symbol == *base)
                .map(|u| &u.unit),
        }
    }

    /// Find a unit by symbol, alias, or case-insensitive name
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` when nothing in this category matches
    pub fn resolve(&self, query: &str) -> ConversionResult<&Unit> {
        let units = self.units();
        self.position(query)
            .and_then(|index| units.get(index).copied())
            .ok_or_else(|| ConversionError::unknown_unit(self.category.key(), query))
    }

    /// Convert `value` from one unit of this category to another
    ///
    /// Same-unit conversions return `value` untouched. A linear conversion
    /// whose base-unit value overflows is retried with the direct factor ratio,
    /// so only results that do not fit in an `f64` are rejected.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` if `value` is NaN or infinite, or the result overflows
    /// - `UnknownUnit` if either unit is not part of this category
    pub fn convert(&self, from: &str, to: &str, value: f64) -> ConversionResult<f64> {
        if !value.is_finite() {
            return Err(ConversionError::invalid_value(format!(
                "{value} is not a finite number"
            )));
        }

        let source = self
            .position(from)
            .ok_or_else(|| ConversionError::unknown_unit(self.category.key(), from))?;
        let target = self
            .position(to)
            .ok_or_else(|| ConversionError::unknown_unit(self.category.key(), to))?;

        if source == target {
            return Ok(value);
        }

        let mut result = self.from_base(target, self.to_base(source, value));
        if !result.is_finite() {
            if let CategoryKind::Linear(units) = &self.kind {
                result = value * (units[source].factor / units[target].factor);
            }
        }
        if result.is_finite() {
            Ok(result)
        } else {
            Err(ConversionError::invalid_value(format!(
                "converting {value} {from} to {to} is out of range"
            )))
        }
    }

    fn position(&self, query: &str) -> Option<usize> {
        let query = query.trim();
        let units = self.units();
        units
            .iter()
            .position(|u| u.symbol == query)
            .or_else(|| units.iter().position(|u| u.is_spelled(query)))
            .or_else(|| units.iter().position(|u| u.is_named(query)))
    }

    fn to_base(&self, index: usize, value: f64) -> f64 {
        match &self.kind {
            CategoryKind::Linear(units) => value * units[index].factor,
            CategoryKind::Affine { units, .. } => (units[index].formula.to_base)(value),
        }
    }

    fn from_base(&self, index: usize, base: f64) -> f64 {
        match &self.kind {
            CategoryKind::Linear(units) => base / units[index].factor,
            CategoryKind::Affine { units, .. } => (units[index].formula.from_base)(base),
        }
    }

    #[allow(clippy::float_cmp)] // base units must map exactly onto themselves
    fn validate(&self) -> Result<(), TableError> {
        let key = self.category.key();
        let units = self.units();
        if units.is_empty() {
            return Err(TableError::EmptyCategory(key.to_owned()));
        }

        let mut spellings = HashSet::new();
        let mut names = HashSet::new();
        for unit in &units {
            for spelling in unit.spellings() {
                if !spellings.insert(spelling) {
                    return Err(TableError::DuplicateUnit {
                        category: key.to_owned(),
                        name: spelling.to_owned(),
                    });
                }
            }
            if !names.insert(unit.name.to_ascii_lowercase()) {
                return Err(TableError::DuplicateUnit {
                    category: key.to_owned(),
                    name: unit.name.to_owned(),
                });
            }
        }

        match &self.kind {
            CategoryKind::Linear(units) => {
                if let Some(bad) = units
                    .iter()
                    .find(|u| !u.factor.is_finite() || u.factor <= 0.0)
                {
                    return Err(TableError::InvalidFactor {
                        category: key.to_owned(),
                        unit: bad.unit.symbol.to_owned(),
                        factor: bad.factor.to_string(),
                    });
                }
                let count = units.iter().filter(|u| u.factor == 1.0).count();
                if count != 1 {
                    return Err(TableError::BaseUnitCount {
                        category: key.to_owned(),
                        count,
                    });
                }
            }
            CategoryKind::Affine { base, units } => {
                let is_identity = units.iter().find(|u| u.unit.symbol == *base).is_some_and(|u| {
                    AFFINE_BASE_PROBES.iter().all(|&probe| {
                        (u.formula.to_base)(probe) == probe
                            && (u.formula.from_base)(probe) == probe
                    })
                });
                if !is_identity {
                    return Err(TableError::MissingAffineBase {
                        category: key.to_owned(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Immutable set of category tables
#[derive(Debug, Clone)]
pub struct ConversionTable {
    categories: Vec<CategoryTable>,
}

impl ConversionTable {
    /// Build and validate a table
    ///
    /// # Errors
    ///
    /// Returns a `TableError` describing the first malformed category
    pub fn new(categories: Vec<CategoryTable>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for table in &categories {
            if !seen.insert(table.category) {
                return Err(TableError::DuplicateCategory(
                    table.category.key().to_owned(),
                ));
            }
            table.validate()?;
        }
        Ok(Self { categories })
    }

    /// Shared table with every supported category, built on first use
    #[must_use]
    pub fn standard() -> &'static Self {
        STANDARD_TABLE.get_or_init(|| Self {
            categories: standard::categories(),
        })
    }

    /// Categories present in this table, in display order
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.categories.iter().map(CategoryTable::category).collect()
    }

    /// Iterate over the category tables
    pub fn iter(&self) -> impl Iterator<Item = &CategoryTable> {
        self.categories.iter()
    }

    /// Look up a category by key
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` if the key is not a category or the table lacks it
    pub fn category(&self, key: &str) -> ConversionResult<&CategoryTable> {
        let category: Category = key.parse()?;
        self.categories
            .iter()
            .find(|table| table.category == category)
            .ok_or_else(|| ConversionError::UnknownCategory(key.to_owned()))
    }

    /// Units of a category in display order
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` if the category is not in this table
    pub fn list_units(&self, key: &str) -> ConversionResult<Vec<&Unit>> {
        Ok(self.category(key)?.units_for_display())
    }

    /// Resolve a unit spelling within a category
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` or `UnknownUnit`
    pub fn resolve_unit(&self, key: &str, unit: &str) -> ConversionResult<&Unit> {
        self.category(key)?.resolve(unit)
    }

    /// Convert a value between two units of a category
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory`, `InvalidValue`, or `UnknownUnit`, checked in that order
    pub fn convert(&self, key: &str, from: &str, to: &str, value: f64) -> ConversionResult<f64> {
        self.category(key)?.convert(from, to, value)
    }
}

// ABOUTME: Unit identity and the two ways a unit relates to its category base unit
// ABOUTME: Linear units carry a scale factor, affine units carry a to/from base formula pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::iter;

/// A unit of measurement, unique by symbol within its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// Canonical symbol shown in the UI (e.g. `km`, `°C`)
    pub symbol: &'static str,
    /// Long name, matched case-insensitively
    pub name: &'static str,
    /// Alternative spellings, matched exactly
    pub aliases: &'static [&'static str],
}

impl Unit {
    /// Unit without aliases
    #[must_use]
    pub const fn new(symbol: &'static str, name: &'static str) -> Self {
        Self {
            symbol,
            name,
            aliases: &[],
        }
    }

    /// Attach alternative spellings
    #[must_use]
    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Symbol and aliases, the spellings that must be unique within a category
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        iter::once(self.symbol).chain(self.aliases.iter().copied())
    }

    pub(crate) fn is_spelled(&self, query: &str) -> bool {
        self.spellings().any(|spelling| spelling == query)
    }

    pub(crate) fn is_named(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query)
    }
}

/// Unit whose relation to the base unit is a pure ratio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearUnit {
    /// Identity
    #[serde(flatten)]
    pub unit: Unit,
    /// How many base units equal one of this unit
    pub factor: f64,
}

impl LinearUnit {
    /// Pair a unit with its scale factor
    #[must_use]
    pub const fn new(unit: Unit, factor: f64) -> Self {
        Self { unit, factor }
    }
}

/// Pure functions mapping a temperature to and from kelvin
#[derive(Debug, Clone, Copy)]
pub struct TemperatureFormula {
    /// This unit to the base unit
    pub to_base: fn(f64) -> f64,
    /// The base unit to this unit
    pub from_base: fn(f64) -> f64,
}

/// Unit whose relation to the base unit needs an offset
#[derive(Debug, Clone)]
pub struct AffineUnit {
    /// Identity
    pub unit: Unit,
    /// Conversion formulas
    pub formula: TemperatureFormula,
}

impl AffineUnit {
    /// Pair a unit with its formulas
    #[must_use]
    pub const fn new(unit: Unit, to_base: fn(f64) -> f64, from_base: fn(f64) -> f64) -> Self {
        Self {
            unit,
            formula: TemperatureFormula { to_base, from_base },
        }
    }
}

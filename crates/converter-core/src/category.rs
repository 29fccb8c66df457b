// ABOUTME: Closed set of measurement categories with stable keys and display labels
// ABOUTME: Parsing is case-insensitive and reports unknown keys as UnknownCategory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of physical quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base unit: meter
    Length,
    /// Base unit: liter
    Volume,
    /// Base unit: kilogram
    Mass,
    /// Base unit: square meter
    Area,
    /// Base unit: meter per second
    Speed,
    /// Base unit: second
    Time,
    /// Base unit: byte
    Data,
    /// Base unit: pascal
    Pressure,
    /// Base unit: kelvin (affine)
    Temperature,
    /// Base unit: radian
    Angle,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Self; 10] = [
        Self::Length,
        Self::Volume,
        Self::Mass,
        Self::Area,
        Self::Speed,
        Self::Time,
        Self::Data,
        Self::Pressure,
        Self::Temperature,
        Self::Angle,
    ];

    /// Stable lower-case key used in forms and URLs
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Volume => "volume",
            Self::Mass => "mass",
            Self::Area => "area",
            Self::Speed => "speed",
            Self::Time => "time",
            Self::Data => "data",
            Self::Pressure => "pressure",
            Self::Temperature => "temperature",
            Self::Angle => "angle",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Volume => "Volume",
            Self::Mass => "Mass",
            Self::Area => "Area",
            Self::Speed => "Speed",
            Self::Time => "Time",
            Self::Data => "Data",
            Self::Pressure => "Pressure",
            Self::Temperature => "Temperature",
            Self::Angle => "Angle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConversionError::UnknownCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(" Length ".parse::<Category>(), Ok(Category::Length));
        assert_eq!("TEMPERATURE".parse::<Category>(), Ok(Category::Temperature));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert_eq!(
            "not-a-category".parse::<Category>(),
            Err(ConversionError::UnknownCategory("not-a-category".to_owned()))
        );
    }

    #[test]
    fn test_serializes_as_key() {
        let json = serde_json::to_string(&Category::Pressure).unwrap();
        assert_eq!(json, "\"pressure\"");
    }
}

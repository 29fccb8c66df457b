// ABOUTME: Built-in unit definitions for every supported category
// ABOUTME: Linear factors are expressed in base units; temperature uses kelvin-based formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::category::Category;
use crate::table::CategoryTable;
use crate::unit::{AffineUnit, LinearUnit, Unit};
use std::f64::consts::PI;

/// Meters in one international mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// Meters in one international nautical mile
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Bytes per binary kilobyte
pub const BYTES_PER_KB: f64 = 1024.0;

/// Bits per byte
pub const BITS_PER_BYTE: f64 = 8.0;

/// Offset between the Celsius and Kelvin scales
pub const KELVIN_OFFSET: f64 = 273.15;

fn celsius_to_kelvin(c: f64) -> f64 {
    c + KELVIN_OFFSET
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - KELVIN_OFFSET
}

fn fahrenheit_to_kelvin(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET
}

fn kelvin_to_fahrenheit(k: f64) -> f64 {
    (k - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0
}

fn rankine_to_kelvin(r: f64) -> f64 {
    r * 5.0 / 9.0
}

fn kelvin_to_rankine(k: f64) -> f64 {
    k * 9.0 / 5.0
}

const fn identity(x: f64) -> f64 {
    x
}

fn linear(category: Category, units: &[(Unit, f64)]) -> CategoryTable {
    CategoryTable::linear(
        category,
        units
            .iter()
            .map(|(unit, factor)| LinearUnit::new(unit.clone(), *factor))
            .collect(),
    )
}

/// Every standard category, in display order
#[must_use]
pub fn categories() -> Vec<CategoryTable> {
    vec![
        length(),
        volume(),
        mass(),
        area(),
        speed(),
        time(),
        data(),
        pressure(),
        temperature(),
        angle(),
    ]
}

fn length() -> CategoryTable {
    linear(
        Category::Length,
        &[
            (Unit::new("m", "meter").with_aliases(&["metre", "meters"]), 1.0),
            (Unit::new("km", "kilometer").with_aliases(&["kilometre"]), 1000.0),
            (Unit::new("cm", "centimeter").with_aliases(&["centimetre"]), 0.01),
            (Unit::new("mm", "millimeter").with_aliases(&["millimetre"]), 0.001),
            (Unit::new("mi", "mile").with_aliases(&["miles"]), METERS_PER_MILE),
            (Unit::new("yd", "yard").with_aliases(&["yards"]), 0.9144),
            (Unit::new("ft", "foot").with_aliases(&["feet"]), 0.3048),
            (Unit::new("in", "inch").with_aliases(&["inches"]), 0.0254),
        ],
    )
}

fn volume() -> CategoryTable {
    linear(
        Category::Volume,
        &[
            (Unit::new("L", "liter").with_aliases(&["l", "litre"]), 1.0),
            (Unit::new("mL", "milliliter").with_aliases(&["ml", "millilitre"]), 0.001),
            (Unit::new("m³", "cubic meter").with_aliases(&["m3"]), 1000.0),
            (Unit::new("gal_US", "US gallon").with_aliases(&["gal"]), 3.785_411_784),
            (Unit::new("qt_US", "US quart").with_aliases(&["qt"]), 0.946_352_946),
            (Unit::new("pt_US", "US pint").with_aliases(&["pt"]), 0.473_176_473),
            (Unit::new("cup_US", "US cup").with_aliases(&["cup"]), 0.236_588_236_5),
            (
                Unit::new("fl_oz_US", "US fluid ounce").with_aliases(&["fl_oz", "fl-oz"]),
                0.029_573_529_56,
            ),
        ],
    )
}

fn mass() -> CategoryTable {
    linear(
        Category::Mass,
        &[
            (Unit::new("kg", "kilogram"), 1.0),
            (Unit::new("g", "gram"), 0.001),
            (Unit::new("mg", "milligram"), 1e-6),
            (Unit::new("lb", "pound").with_aliases(&["lbs"]), 0.453_592_37),
            (Unit::new("oz", "ounce"), 0.028_349_523_125),
            (Unit::new("t", "tonne").with_aliases(&["metric ton"]), 1000.0),
        ],
    )
}

fn area() -> CategoryTable {
    linear(
        Category::Area,
        &[
            (Unit::new("m²", "square meter").with_aliases(&["m2"]), 1.0),
            (Unit::new("km²", "square kilometer").with_aliases(&["km2"]), 1_000_000.0),
            (Unit::new("cm²", "square centimeter").with_aliases(&["cm2"]), 0.0001),
            (Unit::new("mm²", "square millimeter").with_aliases(&["mm2"]), 1e-6),
            (Unit::new("ha", "hectare"), 10_000.0),
            (Unit::new("ac", "acre"), 4_046.856_422_4),
            (Unit::new("ft²", "square foot").with_aliases(&["ft2"]), 0.092_903_04),
            (Unit::new("yd²", "square yard").with_aliases(&["yd2"]), 0.836_127_36),
            (Unit::new("in²", "square inch").with_aliases(&["in2"]), 0.000_645_16),
        ],
    )
}

fn speed() -> CategoryTable {
    linear(
        Category::Speed,
        &[
            (Unit::new("m/s", "meter per second").with_aliases(&["mps"]), 1.0),
            (
                Unit::new("km/h", "kilometer per hour").with_aliases(&["kph", "kmh"]),
                1000.0 / SECONDS_PER_HOUR,
            ),
            (
                Unit::new("mph", "mile per hour"),
                METERS_PER_MILE / SECONDS_PER_HOUR,
            ),
            (
                Unit::new("kn", "knot").with_aliases(&["kt"]),
                METERS_PER_NAUTICAL_MILE / SECONDS_PER_HOUR,
            ),
        ],
    )
}

fn time() -> CategoryTable {
    linear(
        Category::Time,
        &[
            (Unit::new("s", "second").with_aliases(&["sec"]), 1.0),
            (Unit::new("ms", "millisecond"), 0.001),
            (Unit::new("min", "minute"), 60.0),
            (Unit::new("h", "hour").with_aliases(&["hr"]), SECONDS_PER_HOUR),
            (Unit::new("day", "day").with_aliases(&["d"]), 86_400.0),
        ],
    )
}

fn data() -> CategoryTable {
    linear(
        Category::Data,
        &[
            (Unit::new("B", "byte").with_aliases(&["bytes"]), 1.0),
            (Unit::new("bit", "bit").with_aliases(&["bits"]), 1.0 / BITS_PER_BYTE),
            (Unit::new("KB", "kilobyte"), BYTES_PER_KB),
            (Unit::new("MB", "megabyte"), BYTES_PER_KB * BYTES_PER_KB),
            (
                Unit::new("GB", "gigabyte"),
                BYTES_PER_KB * BYTES_PER_KB * BYTES_PER_KB,
            ),
            (
                Unit::new("TB", "terabyte"),
                BYTES_PER_KB * BYTES_PER_KB * BYTES_PER_KB * BYTES_PER_KB,
            ),
            (Unit::new("kbit", "kilobit"), 1000.0 / BITS_PER_BYTE),
            (Unit::new("Mbit", "megabit"), 1_000_000.0 / BITS_PER_BYTE),
            (Unit::new("Gbit", "gigabit"), 1_000_000_000.0 / BITS_PER_BYTE),
        ],
    )
}

fn pressure() -> CategoryTable {
    linear(
        Category::Pressure,
        &[
            (Unit::new("Pa", "pascal"), 1.0),
            (Unit::new("kPa", "kilopascal"), 1000.0),
            (Unit::new("bar", "bar"), 100_000.0),
            (Unit::new("mbar", "millibar"), 100.0),
            (Unit::new("psi", "pound per square inch"), 6_894.757_293_168),
            (Unit::new("atm", "atmosphere"), 101_325.0),
            (Unit::new("mmHg", "millimeter of mercury"), 133.322_368_421_1),
        ],
    )
}

fn temperature() -> CategoryTable {
    CategoryTable::affine(
        Category::Temperature,
        "K",
        vec![
            AffineUnit::new(Unit::new("K", "kelvin"), identity, identity),
            AffineUnit::new(
                Unit::new("°C", "celsius").with_aliases(&["C", "degC"]),
                celsius_to_kelvin,
                kelvin_to_celsius,
            ),
            AffineUnit::new(
                Unit::new("°F", "fahrenheit").with_aliases(&["F", "degF"]),
                fahrenheit_to_kelvin,
                kelvin_to_fahrenheit,
            ),
            AffineUnit::new(
                Unit::new("°R", "rankine").with_aliases(&["R", "degR"]),
                rankine_to_kelvin,
                kelvin_to_rankine,
            ),
        ],
    )
}

fn angle() -> CategoryTable {
    linear(
        Category::Angle,
        &[
            (Unit::new("rad", "radian").with_aliases(&["radians"]), 1.0),
            (Unit::new("deg", "degree").with_aliases(&["°", "degrees"]), PI / 180.0),
            (Unit::new("grad", "gradian").with_aliases(&["gon"]), PI / 200.0),
            (Unit::new("turn", "turn").with_aliases(&["rev"]), 2.0 * PI),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_is_defined_once_in_display_order() {
        let keys: Vec<_> = categories().iter().map(CategoryTable::category).collect();
        assert_eq!(keys, Category::ALL.to_vec());
    }

    #[test]
    fn test_only_temperature_is_affine() {
        for table in categories() {
            assert_eq!(
                table.is_affine(),
                table.category() == Category::Temperature,
                "{}",
                table.category()
            );
        }
    }

    #[test]
    fn test_linear_categories_map_zero_to_zero() {
        for table in categories().iter().filter(|t| !t.is_affine()) {
            for from in table.units() {
                for to in table.units() {
                    let result = table.convert(from.symbol, to.symbol, 0.0).unwrap();
                    assert!(
                        result.abs() < f64::EPSILON,
                        "{} {} -> {}",
                        table.category(),
                        from.symbol,
                        to.symbol
                    );
                }
            }
        }
    }

    #[test]
    fn test_temperature_formulas_are_inverse() {
        for value in [-459.67, -40.0, 0.0, 37.0, 100.0] {
            assert!((kelvin_to_celsius(celsius_to_kelvin(value)) - value).abs() < 1e-9);
            assert!((kelvin_to_fahrenheit(fahrenheit_to_kelvin(value)) - value).abs() < 1e-9);
            assert!((kelvin_to_rankine(rankine_to_kelvin(value)) - value).abs() < 1e-9);
        }
    }
}

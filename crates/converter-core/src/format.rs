// ABOUTME: Display formatting for converted values
// ABOUTME: Fixed twelve fractional digits with trailing zeros trimmed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Fractional digits kept before trimming
pub const DISPLAY_PRECISION: usize = 12;

/// Render a value for display
///
/// ```
/// use converter_core::format_value;
///
/// assert_eq!(format_value(2000.0), "2000");
/// assert_eq!(format_value(0.1), "0.1");
/// assert_eq!(format_value(1.0 / 3.0), "0.333333333333");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    let rendered = format!("{:.*}", DISPLAY_PRECISION, value);
    let trimmed = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered.as_str()
    };

    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

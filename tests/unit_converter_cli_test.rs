// ABOUTME: Integration tests for the unit-converter-cli binary
// ABOUTME: Runs the CLI as a subprocess and checks text output, JSON output, and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the unit-converter-cli binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;
use unit_converter_server::routes::api::{CategoryInfo, ConvertResponse, UnitInfo};

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_unit-converter-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["categories", "units", "convert", "--json"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

// ============================================================================
// categories
// ============================================================================

#[test]
fn test_categories_text() {
    let (exit_code, stdout, _stderr) = run_cli(&["categories"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 10);
    let temperature = stdout
        .lines()
        .find(|line| line.starts_with("temperature"))
        .unwrap();
    assert!(temperature.contains("base: K"));
    assert!(temperature.contains("(affine)"));
}

#[test]
fn test_categories_json() {
    let (exit_code, stdout, _stderr) = run_cli(&["categories", "--json"]);

    assert_eq!(exit_code, 0);
    let categories: Vec<CategoryInfo> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0].key, "length");
}

// ============================================================================
// units
// ============================================================================

#[test]
fn test_units_text_lists_aliases() {
    let (exit_code, stdout, _stderr) = run_cli(&["units", "temperature"]);

    assert_eq!(exit_code, 0);
    let celsius = stdout.lines().find(|line| line.starts_with("°C")).unwrap();
    assert!(celsius.contains("also:"));
    assert!(celsius.contains("celsius"));
}

#[test]
fn test_units_json() {
    let (exit_code, stdout, _stderr) = run_cli(&["--json", "units", "data"]);

    assert_eq!(exit_code, 0);
    let units: Vec<UnitInfo> = serde_json::from_str(&stdout).unwrap();
    assert!(units.iter().any(|unit| unit.symbol == "bit"));
    assert!(units.iter().any(|unit| unit.symbol == "B"));
}

#[test]
fn test_units_unknown_category_fails() {
    let (exit_code, stdout, stderr) = run_cli(&["units", "colour"]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("unknown category 'colour'"), "{stderr}");
}

// ============================================================================
// convert
// ============================================================================

#[test]
fn test_convert_text() {
    let (exit_code, stdout, _stderr) =
        run_cli(&["convert", "temperature", "100", "celsius", "fahrenheit"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "100 °C = 212 °F");
}

#[test]
fn test_convert_negative_value() {
    let (exit_code, stdout, _stderr) = run_cli(&["convert", "temperature", "-40", "°C", "°F"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "-40 °C = -40 °F");
}

#[test]
fn test_convert_json() {
    let (exit_code, stdout, _stderr) = run_cli(&["--json", "convert", "length", "2", "km", "m"]);

    assert_eq!(exit_code, 0);
    let body: ConvertResponse = serde_json::from_str(&stdout).unwrap();
    assert_eq!(body.category, "length");
    assert_eq!(body.from, "km");
    assert_eq!(body.to, "m");
    assert!((body.result - 2000.0).abs() < 1e-9);
    assert_eq!(body.formatted, "2000");
}

#[test]
fn test_convert_unknown_unit_fails() {
    let (exit_code, stdout, stderr) = run_cli(&["convert", "length", "5", "celsius", "km"]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("unknown unit 'celsius'"), "{stderr}");
}

#[test]
fn test_convert_non_numeric_value_fails() {
    let (exit_code, _stdout, stderr) = run_cli(&["convert", "length", "abc", "m", "km"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("abc"), "{stderr}");
}

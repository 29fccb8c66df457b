// ABOUTME: Conversion command for unit-converter-cli
// ABOUTME: Prints "<value> <from> = <result> <to>" or the API's JSON conversion body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use converter_core::{format_value, ConversionTable};
use tracing::debug;
use unit_converter_server::routes::api::ConvertResponse;

/// Convert `value` and print the result
pub fn run(category: &str, value: f64, from: &str, to: &str, json: bool) -> Result<()> {
    let category_table = ConversionTable::standard().category(category)?;
    let result = category_table.convert(from, to, value)?;
    let response = ConvertResponse {
        category: category_table.category().key().to_owned(),
        from: category_table.resolve(from)?.symbol.to_owned(),
        to: category_table.resolve(to)?.symbol.to_owned(),
        value,
        result,
        formatted: format_value(result),
    };
    debug!(category = %response.category, result, "Converted value");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).context("Failed to serialize conversion")?
        );
    } else {
        println!(
            "{} {} = {} {}",
            format_value(response.value),
            response.from,
            response.formatted,
            response.to
        );
    }
    Ok(())
}

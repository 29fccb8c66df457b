// ABOUTME: Category and unit listing commands for unit-converter-cli
// ABOUTME: Prints aligned text tables or the same JSON shapes as the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use converter_core::ConversionTable;
use unit_converter_server::routes::api::{CategoryInfo, UnitInfo};

/// Print every category with its base unit
pub fn categories(json: bool) -> Result<()> {
    let infos: Vec<CategoryInfo> = ConversionTable::standard()
        .iter()
        .map(CategoryInfo::from)
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&infos).context("Failed to serialize categories")?
        );
        return Ok(());
    }

    for info in &infos {
        println!(
            "{:<12} {:<12} base: {:<6} ({})",
            info.key,
            info.label,
            info.base_unit.as_deref().unwrap_or("-"),
            info.kind
        );
    }
    Ok(())
}

/// Print the units of one category
pub fn units(category: &str, json: bool) -> Result<()> {
    let infos: Vec<UnitInfo> = ConversionTable::standard()
        .list_units(category)?
        .into_iter()
        .map(UnitInfo::from)
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&infos).context("Failed to serialize units")?
        );
        return Ok(());
    }

    for info in &infos {
        if info.aliases.is_empty() {
            println!("{:<10} {}", info.symbol, info.name);
        } else {
            println!(
                "{:<10} {} (also: {})",
                info.symbol,
                info.name,
                info.aliases.join(", ")
            );
        }
    }
    Ok(())
}

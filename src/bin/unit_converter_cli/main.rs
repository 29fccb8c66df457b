// ABOUTME: Unit converter CLI for listing categories and units and converting values
// ABOUTME: Uses the same conversion engine as the web server, with text or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List categories
//! unit-converter-cli categories
//!
//! # List the units of one category
//! unit-converter-cli units length
//!
//! # Convert 100 degrees Celsius to Fahrenheit
//! unit-converter-cli convert temperature 100 celsius fahrenheit
//!
//! # Same, as JSON
//! unit-converter-cli --json convert temperature 100 °C °F
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "unit-converter-cli",
    about = "Convert values between units of the same category",
    long_about = "Lists measurement categories and units and converts values \
                  using the unit converter engine."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List every measurement category
    Categories,

    /// List the units of a category
    Units {
        /// Category key, e.g. `length`
        category: String,
    },

    /// Convert a value between two units of a category
    Convert {
        /// Category key, e.g. `temperature`
        category: String,

        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit symbol, alias, or name
        from: String,

        /// Target unit symbol, alias, or name
        to: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    debug!(json = cli.json, "unit-converter-cli started");

    match cli.command {
        Command::Categories => commands::catalog::categories(cli.json),
        Command::Units { category } => commands::catalog::units(&category, cli.json),
        Command::Convert {
            category,
            value,
            from,
            to,
        } => commands::convert::run(&category, value, &from, &to, cli.json),
    }
}

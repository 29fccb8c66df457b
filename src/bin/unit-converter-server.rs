// ABOUTME: Server binary for the unit converter web application
// ABOUTME: Loads environment configuration, initializes logging, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unit Converter Server Binary
//!
//! Serves the converter page, the JSON API, and health checks.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use unit_converter_server::{config::ServerConfig, logging, server};

#[derive(Parser)]
#[command(name = "unit-converter-server")]
#[command(about = "Unit converter web server with an HTML form and a JSON API")]
struct Args {
    /// Override the bind address (`HOST`)
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port (`PORT`)
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    info!("Starting unit converter server");
    info!("{}", config.summary());

    server::run(config).await
}

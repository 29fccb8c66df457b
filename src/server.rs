// ABOUTME: HTTP server assembly with shared state, middleware layers, and graceful shutdown
// ABOUTME: Merges the converter, API, and health routers and serves them with axum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server assembly
//!
//! Layer order, outermost first: request id, request tracing, security
//! headers, body size limit, routes.

use crate::{
    config::ServerConfig,
    middleware::with_request_tracing,
    routes::{ApiRoutes, ConverterRoutes, HealthRoutes},
    security::{security_header_layers, FlashSigner},
};
use anyhow::{Context, Result};
use axum::Router;
use converter_core::ConversionTable;
use std::future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{error, info};

/// Immutable state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Unit table used for every conversion
    pub table: &'static ConversionTable,
    /// Flash cookie signer
    pub flash: FlashSigner,
}

impl AppState {
    /// State over the standard unit table
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_table(ConversionTable::standard(), config)
    }

    /// State over a caller-supplied table
    #[must_use]
    pub fn with_table(table: &'static ConversionTable, config: &ServerConfig) -> Self {
        Self {
            table,
            flash: FlashSigner::new(&config.secret_key, config.cookie_secure),
        }
    }
}

/// Build the complete application router
pub fn build_router(config: &ServerConfig) -> Router {
    router_with_state(Arc::new(AppState::new(config)), config.max_body_bytes)
}

/// Build the application router around existing state
pub fn router_with_state(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    let router = Router::new()
        .merge(ConverterRoutes::routes(Arc::clone(&state)))
        .merge(ApiRoutes::routes(Arc::clone(&state)))
        .merge(HealthRoutes::routes(state))
        .layer(RequestBodyLimitLayer::new(max_body_bytes));

    with_request_tracing(security_header_layers(router))
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let router = build_router(&config);
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(
        address = %listener.local_addr().context("Listener has no local address")?,
        "Unit converter server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Unit converter server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

// ABOUTME: Server resources and HTTP serving for the FitClass API
// ABOUTME: Assembles the router with middleware and binds the TCP listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! Server assembly and HTTP serving

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::middleware::setup_cors;
use crate::routes::{HealthRoutes, PredictionRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared resources handed to route handlers
pub struct ServerResources {
    /// Prediction record storage
    pub database: Database,
}

impl ServerResources {
    /// Bundle the resources the routes depend on
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }
}

/// Build the full application router with middleware layers
#[must_use]
pub fn router(resources: Arc<ServerResources>, config: &ServerConfig) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(PredictionRoutes::routes(resources))
        .layer(setup_cors(config))
        .layer(TraceLayer::new_for_http())
}

/// Bind the HTTP listener and serve until shutdown
///
/// # Errors
///
/// Returns an error if binding or serving fails
pub async fn serve(config: &ServerConfig, resources: Arc<ServerResources>) -> Result<()> {
    let app = router(resources, config);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated unexpectedly")?;

    Ok(())
}

// ABOUTME: Server binary for the FitClass fitness classification API
// ABOUTME: Loads configuration, weights, and the database before serving HTTP traffic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! # FitClass API Server Binary
//!
//! Starts the FitClass HTTP API. The inference engine weights are loaded
//! before the listener binds; a missing or malformed weights resource is
//! fatal to startup.

use anyhow::Result;
use clap::Parser;
use fitclass_server::{
    config::environment::ServerConfig,
    database::Database,
    intelligence::engine,
    logging,
    server::{self, ServerResources},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "fitclass-server")]
#[command(about = "FitClass API - Gym member fitness classification service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override path to the model weights file
    #[arg(long)]
    weights: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(weights) = args.weights {
        config.weights_path = weights;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting FitClass API server");
    info!("{}", config.summary());

    // Load the inference engine before accepting traffic; failure here is
    // fatal to startup
    engine::load_global(&config.weights_path)?;

    // Initialize database and run migrations
    let database = Database::new(&config.database_url).await?;
    info!("Database initialized successfully: {}", config.database_url);

    let resources = Arc::new(ServerResources::new(database));
    server::serve(&config, resources).await
}

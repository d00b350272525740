// ABOUTME: Main library entry point for the FitClass fitness classification API
// ABOUTME: Provides inference, recommendation generation, and REST persistence of predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

#![deny(unsafe_code)]

//! # FitClass Server
//!
//! A small HTTP service that classifies gym members into two fitness
//! classes from five physical metrics, using a fixed pre-trained
//! feed-forward network, and turns the result into templated training,
//! nutrition, and goal recommendations.
//!
//! ## Architecture
//!
//! - **Intelligence**: feature normalization, the inference engine, the
//!   heuristic fallback scorer, and the recommendation generator
//! - **Routes**: REST endpoints for predictions and health checks
//! - **Database**: `SQLite` persistence of prediction records
//! - **Config**: environment-based server configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fitclass_server::config::environment::ServerConfig;
//! use fitclass_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("FitClass server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// Prediction record persistence on `SQLite`
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Inference pipeline: normalization, the neural network, fallback scoring,
/// and recommendation generation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Domain models shared across the pipeline, routes, and database
pub mod models;

/// HTTP route handlers organized by domain
pub mod routes;

/// Server resources and HTTP serving
pub mod server;

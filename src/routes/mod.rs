// ABOUTME: Route module organization for FitClass HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! Route module for the FitClass server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the pipeline and database layers.

/// Health check and system status routes
pub mod health;
/// Prediction routes: classification plus history retrieval
pub mod predictions;

/// Health check route handlers
pub use health::HealthRoutes;
/// Prediction route handlers
pub use predictions::PredictionRoutes;

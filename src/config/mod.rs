// ABOUTME: Configuration module organization for the FitClass server
// ABOUTME: Exposes environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! Configuration management for the FitClass server

/// Environment-based configuration management
pub mod environment;

pub use environment::{CorsConfig, LogLevel, ServerConfig};

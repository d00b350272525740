// ABOUTME: HTTP middleware for the FitClass server
// ABOUTME: Currently provides CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! HTTP middleware

/// CORS middleware configuration
pub mod cors;

pub use cors::setup_cors;

// ABOUTME: Tests the engine-not-ready failure mode in an isolated process
// ABOUTME: Lives in its own test binary so the process-wide singleton stays unset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitclass_server::errors::ErrorCode;
use fitclass_server::intelligence::{self, engine};
use fitclass_server::models::PredictionInput;

// No other test may live in this binary: loading the global engine anywhere
// in this process would defeat the point.

#[test]
fn predict_before_load_signals_engine_not_ready() {
    let input = PredictionInput {
        name: "Early Bird".into(),
        age: 30,
        height_cm: 175.0,
        weight_kg: 70.0,
        situps_count: 40,
        broad_jump_cm: 220.0,
    };

    let error = engine::global().unwrap_err();
    assert_eq!(error.code, ErrorCode::EngineNotReady);

    let error = intelligence::predict_and_recommend(&input).unwrap_err();
    assert_eq!(error.code, ErrorCode::EngineNotReady);
    assert_eq!(error.http_status(), 503);
}

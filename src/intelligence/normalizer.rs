// ABOUTME: Feature normalization mapping raw physical metrics into network input range
// ABOUTME: Applies fixed per-field affine transforms producing a roughly [-1, 1] vector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! Feature normalization for the inference engine
//!
//! Each raw metric is mapped with `(value - center) / scale` using fixed
//! constants derived from the validated input ranges, so a mid-range value
//! normalizes to zero and the extremes land near -1 and 1.

use crate::models::PredictionInput;

/// Number of input features fed to the network
pub const FEATURE_COUNT: usize = 5;

/// Per-field (center, scale) constants, in feature order
/// {age, height, weight, situps, broad jump}
const NORMALIZATION: [(f64, f64); FEATURE_COUNT] = [
    (55.0, 45.0),    // age range 10 to 100
    (150.0, 100.0),  // height range 50 to 250 cm
    (151.5, 148.5),  // weight range 3 to 300 kg
    (100.0, 100.0),  // situps range 0 to 200
    (200.0, 200.0),  // broad jump range 0 to 400 cm
];

/// Normalize a validated input into the fixed-order feature vector
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Safe: normalized values fit f32 range
pub fn normalize(input: &PredictionInput) -> [f32; FEATURE_COUNT] {
    let raw = [
        f64::from(input.age),
        input.height_cm,
        input.weight_kg,
        f64::from(input.situps_count),
        input.broad_jump_cm,
    ];

    let mut features = [0.0f32; FEATURE_COUNT];
    for (feature, (value, (center, scale))) in
        features.iter_mut().zip(raw.iter().zip(NORMALIZATION))
    {
        *feature = ((value - center) / scale) as f32;
    }
    features
}

// ABOUTME: Deterministic heuristic fitness scoring independent of the neural network
// ABOUTME: Supplies the emergency probability substitute when inference fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! Heuristic fitness scoring
//!
//! A weight-free scoring formula over the raw metrics, used two ways: as
//! the emergency substitute probability source when inference fails, and
//! as an always-present auxiliary signal for recommendation generation.
//!
//! Component scores, each in [0, 1]:
//!
//! - age:    `max(0, 1 - |age - 30| / 30)`, weight 0.2
//! - bmi:    `1` inside the healthy 18.5-25 band, else
//!           `max(0, 1 - |bmi - 21.75| / 10)`, weight 0.2
//! - situps: `min(1, situps / 50)`, weight 0.3
//! - jump:   `min(1, jump_cm / 300)`, weight 0.3
//!
//! `fitness_score = round(100 x weighted sum)`, in [0, 100].

use crate::models::PredictionInput;

const AGE_WEIGHT: f64 = 0.2;
const BMI_WEIGHT: f64 = 0.2;
const SITUPS_WEIGHT: f64 = 0.3;
const JUMP_WEIGHT: f64 = 0.3;

/// Bounds applied when the score substitutes for a probability
const FALLBACK_PROBABILITY_MIN: f64 = 0.1;
const FALLBACK_PROBABILITY_MAX: f64 = 0.9;

/// Compute the heuristic fitness score in [0, 100]
///
/// Pure function of the input; identical inputs always produce identical
/// scores.
#[must_use]
pub fn fitness_score(input: &PredictionInput) -> f64 {
    let age = f64::from(input.age);
    let age_score = (1.0 - (age - 30.0).abs() / 30.0).max(0.0);

    let height_m = input.height_cm / 100.0;
    let bmi = input.weight_kg / (height_m * height_m);
    let bmi_score = if (18.5..=25.0).contains(&bmi) {
        1.0
    } else {
        (1.0 - (bmi - 21.75).abs() / 10.0).max(0.0)
    };

    let situps_score = (f64::from(input.situps_count) / 50.0).min(1.0);
    let jump_score = (input.broad_jump_cm / 300.0).min(1.0);

    let weighted = AGE_WEIGHT * age_score
        + BMI_WEIGHT * bmi_score
        + SITUPS_WEIGHT * situps_score
        + JUMP_WEIGHT * jump_score;

    (weighted * 100.0).round()
}

/// Emergency probability substitute derived from the fitness score
///
/// Clamped away from the extremes so a heuristic result never claims the
/// certainty of a real inference.
#[must_use]
pub fn fallback_probability(fitness_score: f64) -> f64 {
    (fitness_score / 100.0).clamp(FALLBACK_PROBABILITY_MIN, FALLBACK_PROBABILITY_MAX)
}

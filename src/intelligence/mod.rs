// ABOUTME: Inference pipeline tying normalization, the network, fallback scoring, and recommendations together
// ABOUTME: Guarantees a valid prediction outcome for every valid input once the engine is loaded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! The prediction pipeline
//!
//! Control flow: raw input -> normalizer -> inference engine -> (on
//! inference failure) fallback scorer -> classification -> recommendation
//! generator. Inference-quality failures are recovered internally and
//! never surface to callers; the only error the pipeline propagates is
//! `EngineNotReady`.

/// Inference engine: the fixed 5-32-1 network and its weight loading
pub mod engine;

/// Heuristic fallback scoring
pub mod fallback;

/// Feature normalization
pub mod normalizer;

/// Templated recommendation generation
pub mod recommendations;

use crate::errors::AppResult;
use crate::models::{Confidence, FitnessClass, PredictionInput, PredictionOutcome};
use engine::Network;
use tracing::warn;

/// Run the full pipeline against the process-wide network
///
/// # Errors
///
/// Returns an `EngineNotReady` error if the global network has not been
/// loaded. All other inference failures are recovered via the fallback
/// scorer.
pub fn predict_and_recommend(input: &PredictionInput) -> AppResult<PredictionOutcome> {
    let network = engine::global()?;
    Ok(predict_with_network(&network, input))
}

/// Run the full pipeline against an explicit network instance
///
/// Always produces a structurally valid outcome: if the forward pass fails
/// or yields a non-finite value, the heuristic fallback probability is
/// substituted and the failure is logged, not propagated.
#[must_use]
pub fn predict_with_network(network: &Network, input: &PredictionInput) -> PredictionOutcome {
    // The fitness score is computed unconditionally: it feeds the
    // recommendation templates even when inference succeeds.
    let fitness_score = fallback::fitness_score(input);

    let features = normalizer::normalize(input);
    let probability = match network.infer(&features) {
        Ok(p) => f64::from(p),
        Err(error) => {
            warn!(%error, "inference failed, substituting heuristic fallback probability");
            fallback::fallback_probability(fitness_score)
        }
    };

    let predicted_class = FitnessClass::from_probability(probability);
    let confidence = Confidence::from_probability(probability);
    let recommendation =
        recommendations::generate(predicted_class, probability, fitness_score, input);

    PredictionOutcome {
        probability,
        predicted_class,
        fitness_score,
        confidence,
        recommendation,
    }
}

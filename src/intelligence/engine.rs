// ABOUTME: Fixed-topology feed-forward inference engine with flat binary weight loading
// ABOUTME: Holds the 5-32-1 network as a process-wide read-only singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! Inference engine for the fitness classification network
//!
//! The network topology is fixed: a 5-feature input layer, one dense layer
//! of 32 ReLU units, and a single sigmoid output unit. Weights are read
//! once at startup from a flat little-endian f32 file and sliced into each
//! layer's kernel and bias in declaration order, advancing a running
//! offset. The loaded network is immutable and shared read-only across
//! concurrent inference calls.

use crate::errors::{AppError, AppResult};
use crate::intelligence::normalizer::FEATURE_COUNT;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Hidden layer width
const HIDDEN_UNITS: usize = 32;

/// Total f32 count the weights resource must hold:
/// 5x32 kernel + 32 bias + 32x1 kernel + 1 bias
pub const EXPECTED_WEIGHT_COUNT: usize =
    FEATURE_COUNT * HIDDEN_UNITS + HIDDEN_UNITS + HIDDEN_UNITS + 1;

/// Activation applied after a dense layer's affine transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Relu,
    Sigmoid,
}

impl Activation {
    fn apply(self, x: f32) -> f32 {
        match self {
            Self::Relu => x.max(0.0),
            Self::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }
}

/// A dense layer with a row-major kernel of shape `[input_dim, output_dim]`
/// and a bias of shape `[output_dim]`
#[derive(Debug, Clone)]
struct DenseLayer {
    input_dim: usize,
    output_dim: usize,
    kernel: Vec<f32>,
    bias: Vec<f32>,
    activation: Activation,
}

impl DenseLayer {
    /// Number of f32 values this layer consumes from the flat weights buffer
    const fn parameter_count(input_dim: usize, output_dim: usize) -> usize {
        input_dim * output_dim + output_dim
    }

    /// Consume this layer's kernel and bias from the flat buffer at `offset`,
    /// advancing the offset past both tensors
    fn from_flat(
        input_dim: usize,
        output_dim: usize,
        activation: Activation,
        weights: &[f32],
        offset: &mut usize,
    ) -> Self {
        let kernel_size = input_dim * output_dim;
        let kernel = weights[*offset..*offset + kernel_size].to_vec();
        *offset += kernel_size;
        let bias = weights[*offset..*offset + output_dim].to_vec();
        *offset += output_dim;

        Self {
            input_dim,
            output_dim,
            kernel,
            bias,
            activation,
        }
    }

    /// Forward pass: `activation(input x kernel + bias)`
    fn forward(&self, input: &[f32]) -> Vec<f32> {
        debug_assert_eq!(input.len(), self.input_dim);
        let mut output = self.bias.clone();
        for (i, x) in input.iter().enumerate() {
            let row = &self.kernel[i * self.output_dim..(i + 1) * self.output_dim];
            for (o, w) in row.iter().enumerate() {
                output[o] += x * w;
            }
        }
        for value in &mut output {
            *value = self.activation.apply(*value);
        }
        output
    }
}

/// The fixed-topology classification network
///
/// Immutable after construction; `infer` takes `&self` and allocates only
/// per-call temporaries, so concurrent calls against a shared instance are
/// safe without locking.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<DenseLayer>,
}

impl Network {
    /// Build the network from a flat weight buffer in layer declaration
    /// order (kernel then bias per dense layer)
    ///
    /// # Errors
    ///
    /// Returns a `WeightsResourceError` if the buffer does not hold exactly
    /// the number of floats the topology requires.
    pub fn from_flat_weights(weights: &[f32]) -> AppResult<Self> {
        if weights.len() != EXPECTED_WEIGHT_COUNT {
            return Err(AppError::weights_resource(format!(
                "Weights resource holds {} floats, expected {}",
                weights.len(),
                EXPECTED_WEIGHT_COUNT
            )));
        }

        let mut offset = 0;
        let layers = vec![
            DenseLayer::from_flat(
                FEATURE_COUNT,
                HIDDEN_UNITS,
                Activation::Relu,
                weights,
                &mut offset,
            ),
            DenseLayer::from_flat(HIDDEN_UNITS, 1, Activation::Sigmoid, weights, &mut offset),
        ];
        debug_assert_eq!(offset, EXPECTED_WEIGHT_COUNT);

        Ok(Self { layers })
    }

    /// Load the network from a flat little-endian f32 weights file
    ///
    /// # Errors
    ///
    /// Returns a `WeightsResourceError` if the file is missing, its byte
    /// length is not a multiple of 4, or it holds the wrong float count.
    pub fn from_weights_file(path: &Path) -> AppResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::weights_resource(format!(
                "Failed to read weights resource {}: {e}",
                path.display()
            ))
        })?;

        if bytes.len() % 4 != 0 {
            return Err(AppError::weights_resource(format!(
                "Weights resource {} is malformed: {} bytes is not a whole number of f32 values",
                path.display(),
                bytes.len()
            )));
        }

        let weights: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Self::from_flat_weights(&weights)
    }

    /// Total trainable parameter count of the topology
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.layers
            .iter()
            .map(|l| DenseLayer::parameter_count(l.input_dim, l.output_dim))
            .sum()
    }

    /// Run the forward pass and produce one probability
    ///
    /// The sigmoid output is clamped to [0, 1] before being returned.
    /// Intermediate buffers are dropped when the call returns.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInferenceOutput` error when the forward pass
    /// produces a missing, NaN, or non-finite value. Callers recover from
    /// this by substituting the fallback score.
    pub fn infer(&self, features: &[f32; FEATURE_COUNT]) -> AppResult<f32> {
        let mut activations: Vec<f32> = features.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations);
        }

        let probability = activations.first().copied().ok_or_else(|| {
            AppError::invalid_inference_output("Forward pass produced no output value")
        })?;

        if !probability.is_finite() {
            return Err(AppError::invalid_inference_output(format!(
                "Forward pass produced a non-finite probability: {probability}"
            )));
        }

        Ok(probability.clamp(0.0, 1.0))
    }
}

/// Process-wide network instance, loaded once before traffic is accepted
///
/// Note: for test isolation, prefer constructing local `Network` instances
/// via `from_flat_weights`/`from_weights_file` instead of this singleton.
static NETWORK: OnceLock<Arc<Network>> = OnceLock::new();

/// Load the global network from the weights file
///
/// Must be called exactly once at process startup before any inference.
///
/// # Errors
///
/// Returns a `WeightsResourceError` if the file cannot be loaded, or an
/// internal error if the network was already loaded.
pub fn load_global(path: &Path) -> AppResult<()> {
    let network = Network::from_weights_file(path)?;
    let parameters = network.parameter_count();

    NETWORK
        .set(Arc::new(network))
        .map_err(|_| AppError::internal("Inference engine already loaded"))?;

    info!(
        weights = %path.display(),
        parameters,
        "inference engine loaded"
    );
    Ok(())
}

/// Get the global network
///
/// # Errors
///
/// Returns an `EngineNotReady` error if `load_global` has not completed.
pub fn global() -> AppResult<Arc<Network>> {
    NETWORK
        .get()
        .cloned()
        .ok_or_else(AppError::engine_not_ready)
}

// ABOUTME: Domain models for prediction inputs, outcomes, and persisted records
// ABOUTME: Includes input range validation mirroring the public API contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! Domain models shared by the inference pipeline, HTTP routes, and database

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw physical metrics submitted for classification
///
/// All numeric fields are range-checked by [`PredictionInput::validate`]
/// before they reach the inference pipeline. The `name` field is validated
/// but unused by the pipeline itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Member name (persisted with the record, not used for inference)
    pub name: String,
    /// Age in years, 10-100
    pub age: u32,
    /// Height in centimeters, 50-250
    pub height_cm: f64,
    /// Weight in kilograms, 3-300
    pub weight_kg: f64,
    /// Situps completed, 0-200
    pub situps_count: u32,
    /// Standing broad jump in centimeters, 0-400
    pub broad_jump_cm: f64,
}

impl PredictionInput {
    /// Validate all fields against their documented ranges
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error naming the first offending field,
    /// or `MissingRequiredField` for an empty name.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::new(
                crate::errors::ErrorCode::MissingRequiredField,
                "Name is required",
            ));
        }
        if !(10..=100).contains(&self.age) {
            return Err(AppError::value_out_of_range(
                "age",
                "Age must be between 10 and 100 years",
            ));
        }
        if !(50.0..=250.0).contains(&self.height_cm) {
            return Err(AppError::value_out_of_range(
                "height_cm",
                "Height must be between 50 and 250 cm",
            ));
        }
        if !(3.0..=300.0).contains(&self.weight_kg) {
            return Err(AppError::value_out_of_range(
                "weight_kg",
                "Weight must be between 3 and 300 kg",
            ));
        }
        if self.situps_count > 200 {
            return Err(AppError::value_out_of_range(
                "situps_count",
                "Situps count must be between 0 and 200",
            ));
        }
        if !(0.0..=400.0).contains(&self.broad_jump_cm) {
            return Err(AppError::value_out_of_range(
                "broad_jump_cm",
                "Broad jump must be between 0 and 400 cm",
            ));
        }
        Ok(())
    }
}

/// Binary fitness classification
///
/// Class A is the higher-performing group: probability >= 0.5 maps to A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessClass {
    A,
    B,
}

impl FitnessClass {
    /// Classify from a probability in [0, 1]
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.5 {
            Self::A
        } else {
            Self::B
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl std::fmt::Display for FitnessClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FitnessClass {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            other => Err(AppError::invalid_input(format!(
                "Unknown fitness class: '{other}'. Valid options: A, B"
            ))),
        }
    }
}

/// Confidence label derived from the predicted probability
///
/// The branches are evaluated in a fixed order: High when the probability is
/// at least 0.8 or at most 0.2, otherwise Medium when at least 0.6 or at
/// most 0.4, otherwise Low. Probabilities near 0.5 always land in Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Derive the confidence label for a probability in [0, 1]
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.8 || probability <= 0.2 {
            Self::High
        } else if probability >= 0.6 || probability <= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Templated guidance derived from a prediction
///
/// Recomputed on every call; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Summary of the member's condition, keyed by class and confidence
    pub description: String,
    /// Six exercise prescriptions with scaled frequencies and durations
    pub exercises: Vec<String>,
    /// Four nutrition guidelines with scaled targets
    pub nutrition: Vec<String>,
    /// Four measurable goals with scaled targets and timelines
    pub goals: Vec<String>,
}

/// Full result of the prediction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// Classification probability in [0, 1]
    pub probability: f64,
    /// Predicted fitness class (A iff probability >= 0.5)
    pub predicted_class: FitnessClass,
    /// Heuristic fitness score in [0, 100], always computed
    pub fitness_score: f64,
    /// Confidence label for the probability
    pub confidence: Confidence,
    /// Templated guidance
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

/// A persisted prediction record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub situps_count: u32,
    pub broad_jump_cm: f64,
    pub predicted_class: FitnessClass,
    pub probability: f64,
    pub fitness_score: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> PredictionInput {
        PredictionInput {
            name: "Test Member".into(),
            age: 30,
            height_cm: 175.0,
            weight_kg: 70.0,
            situps_count: 40,
            broad_jump_cm: 220.0,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        let mut input = valid_input();
        input.age = 9;
        assert!(input.validate().is_err());

        let mut input = valid_input();
        input.height_cm = 251.0;
        assert!(input.validate().is_err());

        let mut input = valid_input();
        input.weight_kg = 2.5;
        assert!(input.validate().is_err());

        let mut input = valid_input();
        input.situps_count = 201;
        assert!(input.validate().is_err());

        let mut input = valid_input();
        input.broad_jump_cm = -1.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut input = valid_input();
        input.name = "  ".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_class_from_probability() {
        assert_eq!(FitnessClass::from_probability(0.5), FitnessClass::A);
        assert_eq!(FitnessClass::from_probability(0.499), FitnessClass::B);
        assert_eq!(FitnessClass::from_probability(1.0), FitnessClass::A);
        assert_eq!(FitnessClass::from_probability(0.0), FitnessClass::B);
    }

    #[test]
    fn test_confidence_boundaries() {
        // High band is checked first, boundaries inclusive
        assert_eq!(Confidence::from_probability(0.8), Confidence::High);
        assert_eq!(Confidence::from_probability(0.2), Confidence::High);
        assert_eq!(Confidence::from_probability(0.95), Confidence::High);
        assert_eq!(Confidence::from_probability(0.05), Confidence::High);

        // Medium band, boundaries inclusive
        assert_eq!(Confidence::from_probability(0.6), Confidence::Medium);
        assert_eq!(Confidence::from_probability(0.4), Confidence::Medium);
        assert_eq!(Confidence::from_probability(0.79), Confidence::Medium);
        assert_eq!(Confidence::from_probability(0.21), Confidence::Medium);
        assert_eq!(Confidence::from_probability(0.65), Confidence::Medium);

        // Everything near 0.5 is Low
        assert_eq!(Confidence::from_probability(0.5), Confidence::Low);
        assert_eq!(Confidence::from_probability(0.41), Confidence::Low);
        assert_eq!(Confidence::from_probability(0.59), Confidence::Low);
    }
}

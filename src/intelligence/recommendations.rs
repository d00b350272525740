// ABOUTME: Recommendation generation mapping classification results to templated guidance
// ABOUTME: Produces descriptions, exercise plans, nutrition guidelines, and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! Templated recommendation generation
//!
//! A pure function of the prediction result and the raw metrics. Class A
//! members get maintenance-and-intensity templates scaled by
//! `intensity = min(1, fitness_score / 80)`; class B members get
//! progression templates scaled by
//! `progression = min(1, (100 - fitness_score) / 50)`. Every list has a
//! fixed shape: 6 exercises, 4 nutrition items, 4 goals.

use crate::models::{Confidence, FitnessClass, PredictionInput, Recommendation};

/// Number of exercise entries per recommendation
pub const EXERCISE_COUNT: usize = 6;
/// Number of nutrition entries per recommendation
pub const NUTRITION_COUNT: usize = 4;
/// Number of goal entries per recommendation
pub const GOAL_COUNT: usize = 4;

/// Generate the full recommendation for a prediction
#[must_use]
pub fn generate(
    class: FitnessClass,
    probability: f64,
    fitness_score: f64,
    input: &PredictionInput,
) -> Recommendation {
    let confidence = Confidence::from_probability(probability);

    match class {
        FitnessClass::A => {
            let intensity = (fitness_score / 80.0).min(1.0);
            Recommendation {
                description: description(class, confidence, fitness_score),
                exercises: class_a_exercises(intensity),
                nutrition: class_a_nutrition(intensity, input),
                goals: class_a_goals(intensity, fitness_score, input),
            }
        }
        FitnessClass::B => {
            let progression = ((100.0 - fitness_score) / 50.0).min(1.0);
            Recommendation {
                description: description(class, confidence, fitness_score),
                exercises: class_b_exercises(progression),
                nutrition: class_b_nutrition(progression, input),
                goals: class_b_goals(progression, fitness_score, input),
            }
        }
    }
}

/// Select the description from the class x confidence table
///
/// The B/Medium, B/Low, and A/Low cells deliberately share near-identical
/// "borderline" wording: members near the class boundary get the same
/// message regardless of which side they landed on.
fn description(class: FitnessClass, confidence: Confidence, score: f64) -> String {
    match (class, confidence) {
        (FitnessClass::A, Confidence::High) => format!(
            "Excellent physical condition (fitness score {score:.0}/100). Your measurements \
             place you clearly in the top performance group; focus on maintaining intensity \
             and avoiding overtraining."
        ),
        (FitnessClass::A, Confidence::Medium) => format!(
            "Good physical condition (fitness score {score:.0}/100). Your measurements place \
             you in the top performance group with margin to improve on specific weak points."
        ),
        (FitnessClass::A, Confidence::Low) => format!(
            "Borderline classification (fitness score {score:.0}/100). Your measurements sit \
             close to the boundary between performance groups; consistent training should \
             consolidate your position."
        ),
        (FitnessClass::B, Confidence::High) => format!(
            "Your measurements indicate substantial room for improvement (fitness score \
             {score:.0}/100). A gradual, structured progression plan will produce quick \
             early gains."
        ),
        (FitnessClass::B, Confidence::Medium | Confidence::Low) => format!(
            "Borderline classification (fitness score {score:.0}/100). Your measurements sit \
             close to the boundary between performance groups; consistent training can tip \
             the balance."
        ),
    }
}

/// Round a scaled template number to the nearest whole value
/// (half away from zero)
#[allow(clippy::cast_possible_truncation)] // Safe: template values are small
fn scaled(value: f64) -> i64 {
    value.round() as i64
}

fn class_a_exercises(intensity: f64) -> Vec<String> {
    vec![
        format!(
            "Strength training {}x per week, {} min per session",
            scaled(3.0 + 2.0 * intensity),
            scaled(45.0 + 15.0 * intensity)
        ),
        format!(
            "Interval running {}x per week, {} min of work intervals",
            scaled(1.0 + 2.0 * intensity),
            scaled(20.0 + 10.0 * intensity)
        ),
        format!(
            "Weighted core circuit: {} situps across {} sets",
            scaled(40.0 + 40.0 * intensity),
            scaled(3.0 + intensity)
        ),
        format!(
            "Plyometric drills: {} broad jumps per session",
            scaled(10.0 + 20.0 * intensity)
        ),
        format!(
            "Steady-state cardio {} min, {}x per week",
            scaled(30.0 + 15.0 * intensity),
            scaled(2.0 + 2.0 * intensity)
        ),
        format!("Mobility work {} min daily", scaled(10.0 + 5.0 * intensity)),
    ]
}

fn class_a_nutrition(intensity: f64, input: &PredictionInput) -> Vec<String> {
    let protein_low = input.weight_kg * (1.4 + 0.4 * intensity);
    let protein_high = input.weight_kg * (1.8 + 0.4 * intensity);
    vec![
        format!(
            "Protein: {protein_low:.1}-{protein_high:.1} g per day to support muscle maintenance"
        ),
        format!(
            "Carbohydrates: around {} g on training days, timed around sessions",
            scaled(input.weight_kg * (4.0 + intensity))
        ),
        format!(
            "Hydration: at least {} ml of water daily",
            scaled(2500.0 + 500.0 * intensity)
        ),
        format!(
            "Keep processed food under {}% of weekly intake",
            scaled(15.0 - 5.0 * intensity)
        ),
    ]
}

fn class_a_goals(intensity: f64, fitness_score: f64, input: &PredictionInput) -> Vec<String> {
    vec![
        format!(
            "Raise situp count to {} within {} weeks",
            scaled(f64::from(input.situps_count) + 10.0 + 10.0 * intensity),
            scaled(8.0 - 2.0 * intensity)
        ),
        format!(
            "Extend broad jump to {} cm within {} weeks",
            scaled(input.broad_jump_cm + 10.0 + 10.0 * intensity),
            scaled(8.0 - 2.0 * intensity)
        ),
        format!(
            "Hold a fitness score of {} or higher",
            scaled((fitness_score + 5.0).min(100.0))
        ),
        format!(
            "Maintain training consistency: {} sessions per week",
            scaled(4.0 + 2.0 * intensity)
        ),
    ]
}

fn class_b_exercises(progression: f64) -> Vec<String> {
    vec![
        format!(
            "Brisk walking {} min, {}x per week",
            scaled(20.0 + 20.0 * progression),
            scaled(3.0 + 2.0 * progression)
        ),
        format!(
            "Bodyweight squats: {} reps across {} sets",
            scaled(20.0 + 20.0 * progression),
            scaled(2.0 + progression)
        ),
        format!(
            "Incline situps: {} reps per day",
            scaled(10.0 + 15.0 * progression)
        ),
        format!(
            "Standing broad jump practice: {} attempts per session",
            scaled(5.0 + 10.0 * progression)
        ),
        format!(
            "Light resistance training {}x per week",
            scaled(1.0 + progression)
        ),
        format!(
            "Stretching routine {} min daily",
            scaled(10.0 + 10.0 * progression)
        ),
    ]
}

fn class_b_nutrition(progression: f64, input: &PredictionInput) -> Vec<String> {
    let protein_low = input.weight_kg * (1.0 + 0.2 * progression);
    let protein_high = input.weight_kg * (1.4 + 0.2 * progression);
    vec![
        format!(
            "Protein: {protein_low:.1}-{protein_high:.1} g per day to support gradual conditioning"
        ),
        format!(
            "Portion control: reduce daily intake by {} kcal if weight loss is a goal",
            scaled(200.0 + 200.0 * progression)
        ),
        format!(
            "Hydration: at least {} ml of water daily",
            scaled(2000.0 + 500.0 * progression)
        ),
        format!(
            "Include vegetables and fiber with {} meals per day",
            scaled(2.0 + progression)
        ),
    ]
}

fn class_b_goals(progression: f64, fitness_score: f64, input: &PredictionInput) -> Vec<String> {
    vec![
        format!(
            "Build up to {} situps within {} weeks",
            scaled(f64::from(input.situps_count) + 10.0 + 15.0 * progression),
            scaled(6.0 + 4.0 * progression)
        ),
        format!(
            "Improve broad jump by {} cm within {} weeks",
            scaled(15.0 + 15.0 * progression),
            scaled(8.0 + 4.0 * progression)
        ),
        format!(
            "Raise the fitness score above {}",
            scaled((fitness_score + 10.0 + 10.0 * progression).min(100.0))
        ),
        format!(
            "Establish a habit of {} active days per week",
            scaled(3.0 + 2.0 * progression)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> PredictionInput {
        PredictionInput {
            name: "Test".into(),
            age: 30,
            height_cm: 175.0,
            weight_kg: 70.0,
            situps_count: 40,
            broad_jump_cm: 220.0,
        }
    }

    #[test]
    fn test_list_shapes_are_fixed() {
        for (class, probability, score) in [
            (FitnessClass::A, 0.9, 86.0),
            (FitnessClass::A, 0.55, 42.0),
            (FitnessClass::B, 0.1, 25.0),
            (FitnessClass::B, 0.45, 55.0),
        ] {
            let rec = generate(class, probability, score, &input());
            assert_eq!(rec.exercises.len(), EXERCISE_COUNT);
            assert_eq!(rec.nutrition.len(), NUTRITION_COUNT);
            assert_eq!(rec.goals.len(), GOAL_COUNT);
        }
    }

    #[test]
    fn test_description_table_selection() {
        let high_a = generate(FitnessClass::A, 0.9, 86.0, &input());
        assert!(high_a.description.starts_with("Excellent physical condition"));

        let medium_a = generate(FitnessClass::A, 0.65, 86.0, &input());
        assert!(medium_a.description.starts_with("Good physical condition"));

        let low_a = generate(FitnessClass::A, 0.5, 86.0, &input());
        assert!(low_a.description.starts_with("Borderline classification"));

        let high_b = generate(FitnessClass::B, 0.1, 25.0, &input());
        assert!(high_b
            .description
            .contains("substantial room for improvement"));
    }

    #[test]
    fn test_borderline_wording_shared_between_b_medium_and_b_low() {
        let medium_b = generate(FitnessClass::B, 0.35, 55.0, &input());
        let low_b = generate(FitnessClass::B, 0.45, 55.0, &input());
        assert_eq!(medium_b.description, low_b.description);
        assert!(low_b.description.starts_with("Borderline classification"));
    }

    #[test]
    fn test_description_interpolates_fitness_score() {
        let rec = generate(FitnessClass::A, 0.9, 86.0, &input());
        assert!(rec.description.contains("86/100"));
    }

    #[test]
    fn test_intensity_caps_at_one() {
        // Scores of 80 and 100 both saturate intensity, so the templates
        // must be identical.
        let at_cap = generate(FitnessClass::A, 0.9, 80.0, &input());
        let beyond = generate(FitnessClass::A, 0.9, 100.0, &input());
        assert_eq!(at_cap.exercises, beyond.exercises);
        assert_eq!(at_cap.nutrition, beyond.nutrition);
    }

    #[test]
    fn test_class_a_exercise_arithmetic() {
        // fitness_score 86 -> intensity 1.0 (capped): 5x strength sessions
        // of 60 min.
        let rec = generate(FitnessClass::A, 0.9, 86.0, &input());
        assert_eq!(
            rec.exercises[0],
            "Strength training 5x per week, 60 min per session"
        );
    }

    #[test]
    fn test_class_b_progression_arithmetic() {
        // fitness_score 50 -> progression 1.0 (capped): 40 min walks 5x per
        // week.
        let rec = generate(FitnessClass::B, 0.3, 50.0, &input());
        assert_eq!(rec.exercises[0], "Brisk walking 40 min, 5x per week");
    }

    #[test]
    fn test_protein_range_has_one_decimal() {
        // weight 70, intensity capped at 1.0: 1.8*70 = 126.0, 2.2*70 = 154.0
        let rec = generate(FitnessClass::A, 0.9, 86.0, &input());
        assert!(rec.nutrition[0].contains("126.0-154.0 g"));
    }
}

//! Full BMI evaluation
//!
//! Runs every stage for one form submission and bundles the outputs into a
//! single [`BmiEvaluation`]. Nothing is cached between calls.

use crate::categories::{resolve_category, BmiCategory};
use crate::delta::{weight_delta, WeightDelta};
use crate::health_metrics::{
    bmi, bmi_scaled, healthy_range, target_weight, HealthyRange, DISPLAY_DECIMALS,
};
use crate::units::{normalize, HeightInput, NormalizedMeasurement, WeightInput};
use serde::{Deserialize, Serialize};

/// Knobs for an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOptions {
    /// Fractional digits kept in the BMI, range bounds and target
    pub decimals: u32,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            decimals: DISPLAY_DECIMALS,
        }
    }
}

/// Result of evaluating one weight/height pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiEvaluation {
    pub measurement: NormalizedMeasurement,
    /// BMI rounded to the requested decimals
    pub bmi: f64,
    /// Position on the 0-100 display scale
    pub bmi_scaled: f64,
    pub category: BmiCategory,
    pub healthy_range: HealthyRange,
    pub target_kg: f64,
    pub delta: WeightDelta,
    pub delta_message: String,
    /// Options the numbers above were produced with
    pub options: EvaluationOptions,
}

impl BmiEvaluation {
    /// Whether the BMI could be computed as a finite number
    pub fn is_finite(&self) -> bool {
        self.bmi.is_finite()
    }
}

/// Evaluate with display precision (one decimal)
pub fn evaluate(weight: WeightInput, height: HeightInput) -> BmiEvaluation {
    evaluate_with(weight, height, EvaluationOptions::default())
}

/// Evaluate a weight/height pair
///
/// The category and display scale come from the rounded BMI so they always
/// agree with the number shown. The delta is computed from the unrounded
/// measurement.
pub fn evaluate_with(
    weight: WeightInput,
    height: HeightInput,
    options: EvaluationOptions,
) -> BmiEvaluation {
    let measurement = normalize(weight, height);
    let NormalizedMeasurement {
        weight_kg, height_m, ..
    } = measurement;

    let bmi_value = bmi(weight_kg, height_m, options.decimals);
    let delta = weight_delta(bmi_value, weight_kg, height_m);

    BmiEvaluation {
        measurement,
        bmi: bmi_value,
        bmi_scaled: bmi_scaled(bmi_value),
        category: resolve_category(bmi_value),
        healthy_range: healthy_range(height_m, options.decimals),
        target_kg: target_weight(height_m, options.decimals),
        delta_message: delta.to_string(),
        delta,
        options,
    }
}

//! BMI service - validation and evaluation for the calculator endpoints
//!
//! Provides:
//! - Form validation followed by a full evaluation
//! - Healthy range lookup for a height alone
//! - The category reference table
//! - A reference evaluation used by the readiness probe

use crate::error::ApiError;
use bmi_calculator_shared::types::{
    category_band_responses, BmiRequest, BmiResponse, CategoryBandResponse, HealthyRangeQuery,
    HealthyRangeResponse,
};
use bmi_calculator_shared::validation::{check_field, validate_bmi_request, validate_height_value};
use bmi_calculator_shared::{
    evaluate_with, healthy_range, target_weight, BmiCategory, EvaluationOptions, HeightInput,
    WeightDelta, WeightInput, CM_PER_M,
};
use tracing::{debug, warn};

/// Reference input for the self-check: 70 kg at 175 cm
const REFERENCE_WEIGHT_KG: f64 = 70.0;
const REFERENCE_HEIGHT_CM: f64 = 175.0;

/// BMI service for calculator operations
pub struct BmiService;

impl BmiService {
    /// Validate a form submission and evaluate it
    pub fn calculate(req: &BmiRequest, options: EvaluationOptions) -> Result<BmiResponse, ApiError> {
        validate_bmi_request(req)?;

        let evaluation = evaluate_with(req.weight(), req.height(), options);

        if !evaluation.is_finite() || evaluation.delta == WeightDelta::Undetermined {
            warn!(
                weight_kg = evaluation.measurement.weight_kg,
                height_m = evaluation.measurement.height_m,
                "Degenerate BMI evaluation"
            );
        }
        debug!(
            bmi = evaluation.bmi,
            category = %evaluation.category,
            weight_unit = %req.weight_unit,
            height_unit = %req.height_unit,
            "BMI evaluated"
        );

        Ok(BmiResponse::from(evaluation))
    }

    /// Healthy range and target for a height in the given unit
    pub fn healthy_range(
        query: &HealthyRangeQuery,
        options: EvaluationOptions,
    ) -> Result<HealthyRangeResponse, ApiError> {
        check_field("height", validate_height_value(query.height))?;

        let height_cm = query.unit.to_cm(query.height);
        let height_m = height_cm / CM_PER_M;
        let range = healthy_range(height_m, options.decimals);

        Ok(HealthyRangeResponse {
            height_cm,
            min_kg: range.min_kg,
            max_kg: range.max_kg,
            target_kg: target_weight(height_m, options.decimals),
        })
    }

    /// The category reference table
    pub fn categories() -> Vec<CategoryBandResponse> {
        category_band_responses()
    }

    /// Run the reference evaluation and confirm it lands in the normal band
    pub fn self_check() -> Result<(), String> {
        let evaluation = evaluate_with(
            WeightInput::kg(REFERENCE_WEIGHT_KG),
            HeightInput::cm(REFERENCE_HEIGHT_CM),
            EvaluationOptions::default(),
        );
        if evaluation.category == BmiCategory::Normal && evaluation.delta.is_healthy() {
            Ok(())
        } else {
            Err(format!(
                "Reference evaluation resolved to {} (BMI {})",
                evaluation.category, evaluation.bmi
            ))
        }
    }
}

//! BMI Calculator WASM Module
//!
//! WebAssembly bindings so the calculator form can evaluate in the browser
//! without a round trip. Results use the same JSON shape as the HTTP API.

use bmi_calculator_shared as engine;
use bmi_calculator_shared::types::BmiResponse;
use bmi_calculator_shared::{HeightInput, HeightUnit, WeightInput, WeightUnit, CM_PER_M};
use wasm_bindgen::prelude::*;

/// Evaluate a form submission and return the result as JSON
///
/// Units are parsed leniently ("kg", "lbs", "inches", ...). An unknown unit
/// is the only error; degenerate numbers produce placeholders instead.
#[wasm_bindgen]
pub fn evaluate_bmi(
    weight: f64,
    weight_unit: &str,
    height: f64,
    height_unit: &str,
) -> Result<String, String> {
    let weight_unit: WeightUnit = weight_unit.parse().map_err(|e: engine::BmiError| e.to_string())?;
    let height_unit: HeightUnit = height_unit.parse().map_err(|e: engine::BmiError| e.to_string())?;

    let evaluation = engine::evaluate(
        WeightInput::new(weight, weight_unit),
        HeightInput::new(height, height_unit),
    );
    BmiResponse::from(evaluation)
        .to_json()
        .map_err(|e| e.to_string())
}

/// BMI from weight (kg) and height (cm), rounded to one decimal
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    engine::bmi(weight_kg, height_cm / CM_PER_M, engine::DISPLAY_DECIMALS)
}

/// Position of a BMI on the 0-100 display scale
#[wasm_bindgen]
pub fn bmi_scaled(bmi: f64) -> f64 {
    engine::bmi_scaled(bmi)
}

/// Lower bound of the healthy weight range for a height (cm)
#[wasm_bindgen]
pub fn healthy_min_kg(height_cm: f64) -> f64 {
    engine::healthy_range(height_cm / CM_PER_M, engine::DISPLAY_DECIMALS).min_kg
}

/// Upper bound of the healthy weight range for a height (cm)
#[wasm_bindgen]
pub fn healthy_max_kg(height_cm: f64) -> f64 {
    engine::healthy_range(height_cm / CM_PER_M, engine::DISPLAY_DECIMALS).max_kg
}

/// Midpoint of the healthy weight range for a height (cm)
#[wasm_bindgen]
pub fn target_weight_kg(height_cm: f64) -> f64 {
    engine::target_weight(height_cm / CM_PER_M, engine::DISPLAY_DECIMALS)
}

/// Message comparing a weight (kg) with the healthy range for a height (cm)
#[wasm_bindgen]
pub fn delta_message(weight_kg: f64, height_cm: f64) -> String {
    let height_m = height_cm / CM_PER_M;
    let bmi = engine::bmi(weight_kg, height_m, engine::DISPLAY_DECIMALS);
    engine::delta_message(bmi, weight_kg, height_m)
}

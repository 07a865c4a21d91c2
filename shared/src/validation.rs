//! Input validation functions
//!
//! These mirror the bounds the calculator form enforces before anything is
//! evaluated. The calculation stages never call them; they trust their
//! inputs and only guarantee not to panic.

use crate::errors::BmiError;
use crate::types::BmiRequest;

/// Smallest weight value the form accepts, in the entered unit
pub const MIN_WEIGHT_VALUE: f64 = 10.0;

/// Largest weight value the form accepts, in the entered unit
pub const MAX_WEIGHT_VALUE: f64 = 500.0;

/// Smallest height value the form accepts, in the entered unit
pub const MIN_HEIGHT_VALUE: f64 = 50.0;

/// Largest height value the form accepts, in the entered unit
pub const MAX_HEIGHT_VALUE: f64 = 272.0;

/// Validate the entered weight value
pub fn validate_weight_value(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if value < MIN_WEIGHT_VALUE {
        return Err("Enter your weight.".to_string());
    }
    if value > MAX_WEIGHT_VALUE {
        return Err(format!("Weight must be at most {}", MAX_WEIGHT_VALUE));
    }
    Ok(())
}

/// Validate the entered height value
pub fn validate_height_value(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if value < MIN_HEIGHT_VALUE {
        return Err("Enter your height.".to_string());
    }
    if value > MAX_HEIGHT_VALUE {
        return Err(format!("Height must be at most {}", MAX_HEIGHT_VALUE));
    }
    Ok(())
}

/// Validate a full calculator request, reporting the first failing field
pub fn validate_bmi_request(req: &BmiRequest) -> Result<(), BmiError> {
    check_field("weight_value", validate_weight_value(req.weight_value))?;
    check_field("height_value", validate_height_value(req.height_value))?;
    Ok(())
}

/// Attach a field name and display label to a single-value check
pub fn check_field(field: &str, outcome: Result<(), String>) -> Result<(), BmiError> {
    outcome.map_err(|msg| {
        BmiError::validation(field, format!("{}: {}", get_field_display_label(field), msg))
    })
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" | "weight_value" => "Weight",
        "height" | "height_value" => "Height",
        "weight_unit" => "Weight Unit",
        "height_unit" => "Height Unit",
        _ => field_name,
    }
}

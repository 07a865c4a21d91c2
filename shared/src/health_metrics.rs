//! Health metrics calculations module
//!
//! Provides the BMI scalar, its 0-100 display scale, and the healthy weight
//! range for a given height.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Never Panic**: Zero height produces a non-finite BMI, not an error
//! 3. **Round Last**: Results are rounded only on the way out, at the
//!    precision the caller asks for

use serde::{Deserialize, Serialize};

/// Lower bound of the normal BMI band (inclusive)
pub const NORMAL_BMI_MIN: f64 = 18.5;

/// Upper bound of the normal BMI band (exclusive)
pub const NORMAL_BMI_MAX: f64 = 25.0;

/// BMI rendered at the left edge (0) of the display scale
pub const SCALE_FLOOR_BMI: f64 = 15.0;

/// BMI rendered at the right edge (100) of the display scale.
/// Commonly used clinical reference for severe obesity.
pub const SCALE_CEILING_BMI: f64 = 40.0;

/// Most fractional digits an f64 can meaningfully carry
pub const MAX_SIGNIFICANT_DECIMALS: u32 = 15;

/// Pass as `decimals` to get a result without rounding
pub const FULL_PRECISION: u32 = u32::MAX;

/// Decimals used by the calculator display
pub const DISPLAY_DECIMALS: u32 = 1;

// ============================================================================
// Rounding
// ============================================================================

/// Round half away from zero to `decimals` fractional digits
///
/// Non-finite values pass through unchanged. Any `decimals` beyond what an
/// f64 can represent (including [`FULL_PRECISION`]) returns `value` as-is.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() || decimals > MAX_SIGNIFICANT_DECIMALS {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// Calculate BMI from canonical weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// A zero height yields `+inf` for a positive weight and `NaN` for a zero
/// weight.
pub fn bmi(weight_kg: f64, height_m: f64, decimals: u32) -> f64 {
    round_to(weight_kg / (height_m * height_m), decimals)
}

/// Map a BMI onto the 0-100 progress bar scale
///
/// Linear between [`SCALE_FLOOR_BMI`] and [`SCALE_CEILING_BMI`], clamped
/// outside them. `NaN` renders as an empty bar.
pub fn bmi_scaled(bmi: f64) -> f64 {
    if bmi.is_nan() {
        return 0.0;
    }
    let span = SCALE_CEILING_BMI - SCALE_FLOOR_BMI;
    ((bmi - SCALE_FLOOR_BMI) / span * 100.0).clamp(0.0, 100.0)
}

// ============================================================================
// Healthy Weight Range
// ============================================================================

/// Weight interval whose BMI falls in the normal band at a given height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthyRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl HealthyRange {
    /// Whether the weight lies within the closed interval
    pub fn contains(&self, weight_kg: f64) -> bool {
        weight_kg >= self.min_kg && weight_kg <= self.max_kg
    }

    pub fn width_kg(&self) -> f64 {
        self.max_kg - self.min_kg
    }

    /// Arithmetic midpoint of the bounds
    pub fn midpoint_kg(&self) -> f64 {
        (self.min_kg + self.max_kg) / 2.0
    }
}

/// Calculate the healthy weight range for a height in meters
///
/// Based on BMI 18.5-25 (normal band). Zero height gives `{0, 0}`.
pub fn healthy_range(height_m: f64, decimals: u32) -> HealthyRange {
    let height_m_sq = height_m * height_m;
    HealthyRange {
        min_kg: round_to(NORMAL_BMI_MIN * height_m_sq, decimals),
        max_kg: round_to(NORMAL_BMI_MAX * height_m_sq, decimals),
    }
}

/// Target weight: midpoint of the healthy range
///
/// The midpoint is taken from the unrounded bounds and then rounded the same
/// way the bounds are.
pub fn target_weight(height_m: f64, decimals: u32) -> f64 {
    round_to(healthy_range(height_m, FULL_PRECISION).midpoint_kg(), decimals)
}

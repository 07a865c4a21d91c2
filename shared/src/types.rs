//! API request and response types
//!
//! Shared by the HTTP backend and the WASM bindings so both surfaces return
//! the same JSON shape. Non-finite numbers serialize as `null` and their
//! display strings use a placeholder.

use crate::categories::{category_bands, BmiCategory, CategoryBand};
use crate::delta::WeightDelta;
use crate::evaluation::BmiEvaluation;
use crate::health_metrics::{round_to, HealthyRange, MAX_SIGNIFICANT_DECIMALS};
use crate::units::{HeightInput, HeightUnit, WeightInput, WeightUnit};
use serde::{Deserialize, Serialize};

/// Shown in place of a number that could not be computed
pub const PLACEHOLDER: &str = "—";

/// Format a number with `decimals` fractional digits, or the placeholder if
/// it is not finite
///
/// Rounds with [`round_to`] first so the text matches the numeric field.
/// Precision beyond what an f64 carries prints the shortest exact form.
pub fn display_number(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        PLACEHOLDER.to_string()
    } else if decimals > MAX_SIGNIFICANT_DECIMALS {
        value.to_string()
    } else {
        format!("{:.*}", decimals as usize, round_to(value, decimals))
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// Calculator form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiRequest {
    /// Weight in `weight_unit`
    pub weight_value: f64,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    /// Height in `height_unit`
    pub height_value: f64,
    #[serde(default)]
    pub height_unit: HeightUnit,
}

impl BmiRequest {
    pub fn weight(&self) -> WeightInput {
        WeightInput::new(self.weight_value, self.weight_unit)
    }

    pub fn height(&self) -> HeightInput {
        HeightInput::new(self.height_value, self.height_unit)
    }
}

/// Pre-formatted strings for rendering the result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiDisplay {
    pub bmi: String,
    pub healthy_range: String,
    pub target: String,
    pub scale_percent: String,
}

/// Calculator result as returned to clients
///
/// Serialize-only: non-finite numbers go out as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub bmi_scaled: f64,
    pub category: BmiCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_detail: Option<String>,
    pub healthy_min_kg: f64,
    pub healthy_max_kg: f64,
    pub target_kg: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub delta: WeightDelta,
    pub delta_message: String,
    pub display: BmiDisplay,
}

impl From<BmiEvaluation> for BmiResponse {
    fn from(eval: BmiEvaluation) -> Self {
        let HealthyRange { min_kg, max_kg } = eval.healthy_range;
        let decimals = eval.options.decimals;
        let display = BmiDisplay {
            bmi: display_number(eval.bmi, decimals),
            healthy_range: format!(
                "{} - {} kg",
                display_number(min_kg, decimals),
                display_number(max_kg, decimals)
            ),
            target: format!("{} kg", display_number(eval.target_kg, decimals)),
            scale_percent: format!("{}%", display_number(eval.bmi_scaled, 0)),
        };

        Self {
            bmi: eval.bmi,
            bmi_scaled: eval.bmi_scaled,
            category: eval.category,
            category_label: eval.category.label().map(str::to_string),
            category_detail: eval.category.detail().map(str::to_string),
            healthy_min_kg: min_kg,
            healthy_max_kg: max_kg,
            target_kg: eval.target_kg,
            weight_kg: eval.measurement.weight_kg,
            height_cm: eval.measurement.height_cm,
            delta: eval.delta,
            delta_message: eval.delta_message,
            display,
        }
    }
}

impl BmiResponse {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// Reference Data
// ============================================================================

/// One row of the category table for clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBandResponse {
    pub category: BmiCategory,
    pub label: String,
    pub detail: String,
    /// Inclusive lower bound, `None` when unbounded
    pub min_bmi: Option<f64>,
    /// Exclusive upper bound, `None` when unbounded
    pub max_bmi: Option<f64>,
}

impl From<&CategoryBand> for CategoryBandResponse {
    fn from(band: &CategoryBand) -> Self {
        let bound = |v: f64| v.is_finite().then_some(v);
        Self {
            category: band.category,
            label: band.label.to_string(),
            detail: band.detail.to_string(),
            min_bmi: bound(band.min_bmi),
            max_bmi: bound(band.max_bmi),
        }
    }
}

/// The full category table
pub fn category_band_responses() -> Vec<CategoryBandResponse> {
    category_bands().iter().map(CategoryBandResponse::from).collect()
}

/// Healthy range lookup query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthyRangeQuery {
    pub height: f64,
    #[serde(default)]
    pub unit: HeightUnit,
}

/// Healthy range for a height
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthyRangeResponse {
    pub height_cm: f64,
    pub min_kg: f64,
    pub max_kg: f64,
    pub target_kg: f64,
}

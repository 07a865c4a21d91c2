//! BMI category classification
//!
//! The bands are fixed, ordered, and non-overlapping. Each is left-closed and
//! right-open, so a BMI sitting exactly on a threshold belongs to the upper
//! category.

use crate::health_metrics::{NORMAL_BMI_MAX, NORMAL_BMI_MIN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the overweight band (inclusive)
pub const OVERWEIGHT_BMI_MIN: f64 = NORMAL_BMI_MAX;

/// Lower bound of the obese band (inclusive)
pub const OBESE_BMI_MIN: f64 = 30.0;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    /// BMI was not a number (zero weight over zero height)
    Undefined,
}

/// One row of the category table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryBand {
    pub category: BmiCategory,
    /// Inclusive lower bound
    pub min_bmi: f64,
    /// Exclusive upper bound
    pub max_bmi: f64,
    pub label: &'static str,
    pub detail: &'static str,
}

static CATEGORY_BANDS: [CategoryBand; 4] = [
    CategoryBand {
        category: BmiCategory::Underweight,
        min_bmi: f64::NEG_INFINITY,
        max_bmi: NORMAL_BMI_MIN,
        label: "Underweight",
        detail: "Your BMI is below 18.5. A balanced diet with enough energy and \
                 protein can help you reach a healthier weight; consider \
                 talking to a health professional.",
    },
    CategoryBand {
        category: BmiCategory::Normal,
        min_bmi: NORMAL_BMI_MIN,
        max_bmi: OVERWEIGHT_BMI_MIN,
        label: "Normal",
        detail: "Your BMI is between 18.5 and 25. Keep up a varied diet and \
                 regular physical activity to stay here.",
    },
    CategoryBand {
        category: BmiCategory::Overweight,
        min_bmi: OVERWEIGHT_BMI_MIN,
        max_bmi: OBESE_BMI_MIN,
        label: "Overweight",
        detail: "Your BMI is between 25 and 30. Small, sustained changes in diet \
                 and activity can bring it back toward the normal band.",
    },
    CategoryBand {
        category: BmiCategory::Obese,
        min_bmi: OBESE_BMI_MIN,
        max_bmi: f64::INFINITY,
        label: "Obese",
        detail: "Your BMI is 30 or higher, which is associated with higher health \
                 risks. A health professional can help you plan a safe way \
                 forward.",
    },
];

/// The category table, in ascending BMI order
pub fn category_bands() -> &'static [CategoryBand] {
    &CATEGORY_BANDS
}

impl BmiCategory {
    /// The four defined categories in ascending order
    pub fn all() -> [BmiCategory; 4] {
        [
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::Obese,
        ]
    }

    /// Table row for this category, `None` for `Undefined`
    pub fn band(&self) -> Option<&'static CategoryBand> {
        CATEGORY_BANDS.iter().find(|band| band.category == *self)
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, BmiCategory::Undefined)
    }

    /// Short label for display
    pub fn label(&self) -> Option<&'static str> {
        self.band().map(|band| band.label)
    }

    /// Longer explanatory text
    pub fn detail(&self) -> Option<&'static str> {
        self.band().map(|band| band.detail)
    }

    /// Get the BMI range for this category as `[min, max)`
    pub fn range(&self) -> Option<(f64, f64)> {
        self.band().map(|band| (band.min_bmi, band.max_bmi))
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().unwrap_or("Undefined"))
    }
}

/// Classify BMI into category
///
/// `NaN` is the only input without a category. `+inf` is obese; negative
/// values and `-inf` fall in the underweight band.
pub fn resolve_category(bmi: f64) -> BmiCategory {
    if bmi.is_nan() {
        return BmiCategory::Undefined;
    }
    CATEGORY_BANDS
        .iter()
        .find(|band| bmi >= band.min_bmi && bmi < band.max_bmi)
        .map(|band| band.category)
        .unwrap_or(BmiCategory::Obese)
}

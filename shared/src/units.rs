//! Unit conversion and normalization module
//!
//! Weight and height arrive in whatever unit the user picked in the form.
//! Everything downstream works in SI units, so conversion happens once here
//! and nowhere else.
//!
//! # Design Principles
//!
//! 1. **Internal Consistency**: All calculations use kg and meters
//! 2. **Type Safety**: Units are explicit in types, not just f64
//! 3. **Full Precision**: No rounding during normalization; rounding is a
//!    display concern of later stages
//! 4. **Total**: Zero and negative values convert arithmetically, never panic

use crate::errors::BmiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per international avoirdupois pound (exact by definition)
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Centimeters per international inch (exact by definition)
pub const CM_PER_INCH: f64 = 2.54;

/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;

// ============================================================================
// Weight Units
// ============================================================================

/// Weight unit accepted by the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lb => value * KG_PER_LB,
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lb => kg / KG_PER_LB,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Lb),
            _ => Err(BmiError::UnknownWeightUnit(s.to_string())),
        }
    }
}

// ============================================================================
// Height Units
// ============================================================================

/// Height unit accepted by the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    In,
}

impl HeightUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::In => value * CM_PER_INCH,
        }
    }

    /// Convert from centimeters to this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::In => cm / CM_PER_INCH,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::In => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "in" | "inch" | "inches" => Ok(HeightUnit::In),
            _ => Err(BmiError::UnknownHeightUnit(s.to_string())),
        }
    }
}

// ============================================================================
// Inputs and Normalized Measurement
// ============================================================================

/// A weight as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightInput {
    pub value: f64,
    #[serde(default)]
    pub unit: WeightUnit,
}

impl WeightInput {
    pub fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    pub fn kg(value: f64) -> Self {
        Self::new(value, WeightUnit::Kg)
    }

    pub fn lb(value: f64) -> Self {
        Self::new(value, WeightUnit::Lb)
    }
}

/// A height as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightInput {
    pub value: f64,
    #[serde(default)]
    pub unit: HeightUnit,
}

impl HeightInput {
    pub fn new(value: f64, unit: HeightUnit) -> Self {
        Self { value, unit }
    }

    pub fn cm(value: f64) -> Self {
        Self::new(value, HeightUnit::Cm)
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, HeightUnit::In)
    }
}

/// Weight and height in canonical SI units
///
/// Always derived from the raw inputs of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMeasurement {
    pub weight_kg: f64,
    pub height_m: f64,
    /// Height in centimeters, kept for display
    pub height_cm: f64,
}

/// Convert user inputs into canonical SI units
///
/// No rounding is applied and non-positive values are converted as-is;
/// range checks belong to the validation layer.
pub fn normalize(weight: WeightInput, height: HeightInput) -> NormalizedMeasurement {
    let height_cm = height.unit.to_cm(height.value);
    NormalizedMeasurement {
        weight_kg: weight.unit.to_kg(weight.value),
        height_m: height_cm / CM_PER_M,
        height_cm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Weight Unit Tests
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Weight conversion round-trip preserves value
        #[test]
        fn prop_weight_roundtrip_kg(kg in 10.0f64..500.0) {
            let lb = WeightUnit::Lb.from_kg(kg);
            let back_to_kg = WeightUnit::Lb.to_kg(lb);
            prop_assert!((kg - back_to_kg).abs() < 1e-9,
                "Round-trip failed: {} -> {} -> {}", kg, lb, back_to_kg);
        }

        /// Property: Kg identity conversion
        #[test]
        fn prop_kg_identity(kg in 10.0f64..500.0) {
            prop_assert_eq!(WeightUnit::Kg.to_kg(kg), kg);
            prop_assert_eq!(WeightUnit::Kg.from_kg(kg), kg);
        }

        /// Property: Normalization never rounds
        #[test]
        fn prop_normalize_keeps_full_precision(weight in 10.0f64..500.0, height in 50.0f64..272.0) {
            let m = normalize(WeightInput::kg(weight), HeightInput::cm(height));
            prop_assert_eq!(m.weight_kg, weight);
            prop_assert_eq!(m.height_cm, height);
            prop_assert_eq!(m.height_m, height / 100.0);
        }
    }

    #[test]
    fn test_known_weight_conversions() {
        // 100 lb = 45.359237 kg
        let kg = WeightUnit::Lb.to_kg(100.0);
        assert!((kg - 45.359237).abs() < 1e-9);

        // 1 kg = 2.20462 lb
        let lb = WeightUnit::Lb.from_kg(1.0);
        assert!((lb - 2.20462).abs() < 0.001);
    }

    #[test]
    fn test_pounds_and_kilograms_normalize_to_same_weight() {
        let metric = normalize(WeightInput::kg(70.0), HeightInput::cm(175.0));
        let imperial = normalize(WeightInput::lb(154.324), HeightInput::cm(175.0));
        assert!((metric.weight_kg - imperial.weight_kg).abs() < 0.01);
    }

    // =========================================================================
    // Height Unit Tests
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Height conversion round-trip preserves value
        #[test]
        fn prop_height_roundtrip_cm(cm in 50.0f64..272.0) {
            let inches = HeightUnit::In.from_cm(cm);
            let back_to_cm = HeightUnit::In.to_cm(inches);
            prop_assert!((cm - back_to_cm).abs() < 1e-9,
                "Round-trip failed: {} -> {} -> {}", cm, inches, back_to_cm);
        }
    }

    #[test]
    fn test_known_height_conversions() {
        // 68.9 in = 175.006 cm
        let m = normalize(WeightInput::kg(70.0), HeightInput::inches(68.9));
        assert!((m.height_cm - 175.006).abs() < 1e-9);
        assert!((m.height_m - 1.75006).abs() < 1e-9);

        // 180 cm = 70.866 inches
        let inches = HeightUnit::In.from_cm(180.0);
        assert!((inches - 70.866).abs() < 0.01);
    }

    #[test]
    fn test_normalize_non_positive_values() {
        let m = normalize(WeightInput::kg(-5.0), HeightInput::cm(0.0));
        assert_eq!(m.weight_kg, -5.0);
        assert_eq!(m.height_m, 0.0);
        assert_eq!(m.height_cm, 0.0);
    }

    // =========================================================================
    // String Parsing Tests
    // =========================================================================

    #[test]
    fn test_weight_unit_parsing() {
        assert_eq!("kg".parse::<WeightUnit>().unwrap(), WeightUnit::Kg);
        assert_eq!("LB".parse::<WeightUnit>().unwrap(), WeightUnit::Lb);
        assert_eq!("pounds".parse::<WeightUnit>().unwrap(), WeightUnit::Lb);
        assert!(matches!(
            "stone".parse::<WeightUnit>(),
            Err(BmiError::UnknownWeightUnit(_))
        ));
    }

    #[test]
    fn test_height_unit_parsing() {
        assert_eq!("cm".parse::<HeightUnit>().unwrap(), HeightUnit::Cm);
        assert_eq!(" inches ".parse::<HeightUnit>().unwrap(), HeightUnit::In);
        assert!("ft".parse::<HeightUnit>().is_err());
    }

    #[test]
    fn test_unit_wire_names() {
        assert_eq!(serde_json::to_string(&WeightUnit::Lb).unwrap(), "\"lb\"");
        assert_eq!(serde_json::to_string(&HeightUnit::In).unwrap(), "\"in\"");
        assert_eq!(format!("{}", HeightUnit::Cm), "cm");
    }
}

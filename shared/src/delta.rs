//! Comparison of the current weight against the healthy range
//!
//! [`weight_delta`] decides which side of the range the weight is on and by
//! how much; its `Display` impl renders the message shown under the result.

use crate::health_metrics::{healthy_range, round_to, FULL_PRECISION};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimals used for every number interpolated into the message
const MESSAGE_DECIMALS: u32 = 1;

/// Where the current weight sits relative to the healthy range
///
/// All distances are positive kilograms rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "position", rename_all = "snake_case")]
pub enum WeightDelta {
    /// Below the healthy floor by `kg`
    BelowRange { kg: f64, floor_kg: f64 },
    /// Above the healthy ceiling by `kg`
    AboveRange { kg: f64, ceiling_kg: f64 },
    /// Inside the range, `to_target_kg` away from the midpoint
    WithinRange { to_target_kg: f64, target_kg: f64 },
    /// No meaningful comparison (degenerate height or BMI)
    Undetermined,
}

impl WeightDelta {
    /// Signed distance to the healthy range: negative below, positive above,
    /// zero inside or when undetermined
    pub fn signed_kg(&self) -> f64 {
        match self {
            WeightDelta::BelowRange { kg, .. } => -kg,
            WeightDelta::AboveRange { kg, .. } => *kg,
            WeightDelta::WithinRange { .. } | WeightDelta::Undetermined => 0.0,
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, WeightDelta::WithinRange { .. })
    }
}

impl fmt::Display for WeightDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightDelta::BelowRange { kg, floor_kg } if *kg == 0.0 => write!(
                f,
                "You are just below the healthy range, at its lower limit of {:.1} kg.",
                floor_kg
            ),
            WeightDelta::AboveRange { kg, ceiling_kg } if *kg == 0.0 => write!(
                f,
                "You are just above the healthy range, at its upper limit of {:.1} kg.",
                ceiling_kg
            ),
            WeightDelta::BelowRange { kg, floor_kg } => write!(
                f,
                "You are {:.1} kg below the healthy range. Gaining {:.1} kg would bring you to its lower limit of {:.1} kg.",
                kg, kg, floor_kg
            ),
            WeightDelta::AboveRange { kg, ceiling_kg } => write!(
                f,
                "You are {:.1} kg above the healthy range. Losing {:.1} kg would bring you to its upper limit of {:.1} kg.",
                kg, kg, ceiling_kg
            ),
            WeightDelta::WithinRange { to_target_kg, target_kg } if *to_target_kg == 0.0 => write!(
                f,
                "Your weight is within the healthy range and right at the target of {:.1} kg.",
                target_kg
            ),
            WeightDelta::WithinRange { to_target_kg, target_kg } => write!(
                f,
                "Your weight is within the healthy range. You are {:.1} kg from the target weight of {:.1} kg.",
                to_target_kg, target_kg
            ),
            WeightDelta::Undetermined => write!(
                f,
                "Not enough data to compare your weight with the healthy range."
            ),
        }
    }
}

/// Compare a weight with the healthy range for the same height
///
/// Uses the full-precision range; only the reported distances are rounded.
pub fn weight_delta(bmi: f64, weight_kg: f64, height_m: f64) -> WeightDelta {
    if !bmi.is_finite() || !weight_kg.is_finite() || height_m.is_nan() || height_m <= 0.0 {
        return WeightDelta::Undetermined;
    }

    let range = healthy_range(height_m, FULL_PRECISION);
    let rounded = |kg: f64| round_to(kg, MESSAGE_DECIMALS);

    if weight_kg < range.min_kg {
        WeightDelta::BelowRange {
            kg: rounded(range.min_kg - weight_kg),
            floor_kg: rounded(range.min_kg),
        }
    } else if weight_kg > range.max_kg {
        WeightDelta::AboveRange {
            kg: rounded(weight_kg - range.max_kg),
            ceiling_kg: rounded(range.max_kg),
        }
    } else {
        let target = range.midpoint_kg();
        WeightDelta::WithinRange {
            to_target_kg: rounded((weight_kg - target).abs()),
            target_kg: rounded(target),
        }
    }
}

/// Human-readable comparison of a weight with the healthy range
pub fn delta_message(bmi: f64, weight_kg: f64, height_m: f64) -> String {
    weight_delta(bmi, weight_kg, height_m).to_string()
}

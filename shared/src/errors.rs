//! Error types for the BMI calculator
//!
//! The calculation stages themselves never fail; these errors only come from
//! parsing unit names and validating user-entered form values.

use thiserror::Error;

/// Errors raised at the input boundary of the calculator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BmiError {
    #[error("Unknown weight unit: {0}")]
    UnknownWeightUnit(String),

    #[error("Unknown height unit: {0}")]
    UnknownHeightUnit(String),

    #[error("{message}")]
    Validation { field: String, message: String },
}

impl BmiError {
    /// Create a validation error for a form field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field, if the error concerns one
    pub fn field(&self) -> Option<&str> {
        match self {
            BmiError::UnknownWeightUnit(_) => Some("weight_unit"),
            BmiError::UnknownHeightUnit(_) => Some("height_unit"),
            BmiError::Validation { field, .. } => Some(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = BmiError::validation("weight_value", "Weight: Enter your weight.");
        assert_eq!(err.to_string(), "Weight: Enter your weight.");
        assert_eq!(err.field(), Some("weight_value"));
    }

    #[test]
    fn test_unit_error_field() {
        let err = BmiError::UnknownHeightUnit("furlong".to_string());
        assert_eq!(err.field(), Some("height_unit"));
        assert_eq!(err.to_string(), "Unknown height unit: furlong");
    }
}

//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The calculator itself is stateless; the only shared resource is the
//! configuration, which is read-only after startup.

use crate::config::AppConfig;
use bmi_calculator_shared::EvaluationOptions;
use std::sync::Arc;

/// Shared application state
///
/// Cloning is O(1): the configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Evaluation options derived from the calculator config
    #[inline]
    pub fn evaluation_options(&self) -> EvaluationOptions {
        self.config.calculator.evaluation_options()
    }
}

//! BMI Calculator Shared Library
//!
//! The calculation engine behind the BMI calculator: unit normalization, BMI
//! evaluation, category resolution, healthy weight range, and the weight
//! comparison message. Used by the backend and WASM crates.

pub mod categories;
pub mod delta;
pub mod errors;
pub mod evaluation;
pub mod health_metrics;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use categories::*;
pub use delta::*;
pub use errors::*;
pub use evaluation::*;
pub use health_metrics::*;
pub use units::*;

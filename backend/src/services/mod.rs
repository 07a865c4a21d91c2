//! Business logic services
//!
//! Services sit between the HTTP handlers and the shared calculation engine.

pub mod bmi;

pub use bmi::BmiService;

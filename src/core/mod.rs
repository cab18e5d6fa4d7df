//! Core calculations and configuration

pub mod config;
pub mod log;
pub mod yields;

// Re-export main types for cleaner imports
pub use yields::{Evaluation, ProjectInputs, SensitivityPoint, YieldBand, YieldResult};

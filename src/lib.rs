// Synthetic device usage generator
// Main library entry point

pub mod core;

// Re-export main types
pub use crate::core::error::{Result, UsageError};
pub use crate::core::generator::generate;
pub use crate::core::model::{Device, Sample, Series, StepBounds, UsageReport, Window};
pub use crate::core::orchestrator::handle;

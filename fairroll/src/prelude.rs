//! Common imports for working with fairroll samplers.
//!
//! This module provides a convenient prelude for importing commonly used
//! types and traits.

pub use crate::adjuster::{Adjuster, ParabolicAdjuster, SteppedAdjuster};
pub use crate::error::SamplerError;
pub use crate::random::{
    RandomProvider, ScriptedRandomProvider, SeededRandomProvider, ThreadRandomProvider,
};
pub use crate::report::DiagnosticReport;
pub use crate::sampler::StreakSampler;

// Re-export commonly used external types
pub use std::sync::Arc;

/// Result type specialized to sampler errors.
pub type Result<T> = std::result::Result<T, SamplerError>;

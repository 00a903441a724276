//! Error types for the fairroll sampler.

use thiserror::Error;

/// Errors that can occur while sampling outcomes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SamplerError {
    /// The requested success chance is outside the closed unit interval.
    ///
    /// Raised synchronously before any state is touched; the streak and
    /// the random source are left exactly as they were.
    #[error("chance must be within [0, 1], got {chance}")]
    ChanceOutOfRange {
        /// The rejected chance value.
        chance: f64,
    },
}

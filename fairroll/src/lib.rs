//! # Fairroll
//!
//! Streak-damped boolean outcome sampling.
//!
//! Fairroll generates success/failure outcomes from a caller-supplied
//! probability while making long runs of the same result statistically
//! less likely. The nominal chance is honored in expectation, but
//! pathological streaks (ten failures in a row at a 50% chance) are
//! damped: after each outcome, the chance used for the next roll is
//! nudged against the current streak.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │             StreakSampler (engine)               │
//! │   streak counter + compounding adjustment loop   │
//! ├───────────────────────┬──────────────────────────┤
//! │  Adjuster             │  RandomProvider          │
//! │  • SteppedAdjuster    │  • ThreadRandomProvider  │
//! │  • ParabolicAdjuster  │  • SeededRandomProvider  │
//! │  • any Fn(f64) -> f64 │  • ScriptedRandomProvider│
//! ├───────────────────────┴──────────────────────────┤
//! │         DiagnosticReport (batch statistics)      │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fairroll::StreakSampler;
//!
//! let mut sampler = StreakSampler::new();
//! let hit = sampler.next(0.5)?;
//! println!("rolled a {}", if hit { "success" } else { "failure" });
//! # Ok::<(), fairroll::SamplerError>(())
//! ```
//!
//! ## How the damping works
//!
//! The sampler keeps a signed streak counter. Before each roll it asks its
//! [`Adjuster`] for an adjustment once per unit of streak magnitude,
//! compounding the result: a failure streak raises the effective chance,
//! a success streak lowers it. A zero streak leaves the chance untouched,
//! so a fresh or freshly [`reset`](StreakSampler::reset) sampler honors the
//! nominal probability exactly.
//!
//! Randomness is injected through the [`RandomProvider`] capability, so
//! tests can substitute seeded or fully scripted sources for the
//! production thread-local RNG.

#![deny(missing_docs)]

pub mod adjuster;
pub mod error;
pub mod prelude;
pub mod random;
pub mod report;
pub mod sampler;

pub use adjuster::{Adjuster, ParabolicAdjuster, SteppedAdjuster};
pub use error::SamplerError;
pub use random::{
    RandomProvider, ScriptedRandomProvider, SeededRandomProvider, ThreadRandomProvider,
};
pub use report::DiagnosticReport;
pub use sampler::StreakSampler;

//! Diagnostic statistics for sampler behavior.
//!
//! Runs a batch of trials through a fresh sampler and, side by side, an
//! unadjusted baseline using its own random source, then collects
//! comparable statistics: success counts, rates, and the longest streaks
//! seen in each sequence. This is a consumer of the engine, not part of
//! it; the interesting number is usually how much shorter the adjusted
//! sequence's longest streak is.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::adjuster::Adjuster;
use crate::error::SamplerError;
use crate::random::RandomProvider;
use crate::sampler::StreakSampler;

/// Probabilities at which example adjustment values are sampled.
const EXAMPLE_CHANCES: [f64; 5] = [0.10, 0.25, 0.50, 0.75, 0.90];

/// Statistics gathered from a batch of adjusted and baseline rolls.
///
/// Produced by [`DiagnosticReport::collect`] or
/// [`StreakSampler::diagnostic`]; render with `Display` for a
/// human-readable summary.
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    /// Nominal success chance used for every trial.
    pub chance: f64,
    /// Number of trials in the batch.
    pub runs: u64,
    /// Adjustment value the adjuster reports at the nominal chance.
    pub adjustment_at_chance: f64,
    /// Example `(chance, adjustment)` pairs at 10/25/50/75/90%.
    pub adjustment_examples: [(f64, f64); 5],
    /// Successes expected from the nominal chance alone.
    pub expected_successes: u64,
    /// Observed successes in the adjusted sequence.
    pub successes: u64,
    /// Observed failures in the adjusted sequence.
    pub failures: u64,
    /// Longest success run in the adjusted sequence.
    pub longest_success_streak: u64,
    /// Longest failure run in the adjusted sequence.
    pub longest_failure_streak: u64,
    /// Longest success run in the unadjusted baseline sequence.
    pub baseline_success_streak: u64,
    /// Longest failure run in the unadjusted baseline sequence.
    pub baseline_failure_streak: u64,
}

impl DiagnosticReport {
    /// Run `runs` trials at `chance` and collect statistics.
    ///
    /// A fresh sampler is built around `adjuster` and `random`; the
    /// baseline rolls `baseline.random_ratio() <= chance` with no streak
    /// logic, consuming its own source independently.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::ChanceOutOfRange`] if `chance` is not
    /// within `[0, 1]`.
    pub fn collect<R: RandomProvider>(
        adjuster: Arc<dyn Adjuster>,
        random: R,
        baseline: R,
        chance: f64,
        runs: u64,
    ) -> Result<Self, SamplerError> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(SamplerError::ChanceOutOfRange { chance });
        }

        let adjustment_at_chance = adjuster.adjust(chance);
        let adjustment_examples = EXAMPLE_CHANCES.map(|c| (c, adjuster.adjust(c)));

        let mut sampler = StreakSampler::from_parts(Arc::clone(&adjuster), random);
        let mut adjusted = StreakTally::default();
        let mut unadjusted = StreakTally::default();
        let mut successes = 0u64;

        for _ in 0..runs {
            if sampler.next(chance)? {
                successes += 1;
                adjusted.record(true);
            } else {
                adjusted.record(false);
            }
            unadjusted.record(baseline.random_ratio() <= chance);
        }

        debug!(chance, runs, successes, "collected diagnostic batch");

        Ok(Self {
            chance,
            runs,
            adjustment_at_chance,
            adjustment_examples,
            expected_successes: (chance * runs as f64).round() as u64,
            successes,
            failures: runs - successes,
            longest_success_streak: adjusted.longest_successes,
            longest_failure_streak: adjusted.longest_failures,
            baseline_success_streak: unadjusted.longest_successes,
            baseline_failure_streak: unadjusted.longest_failures,
        })
    }

    /// Observed success rate over the batch, or zero for an empty batch.
    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.successes as f64 / self.runs as f64
        }
    }

    /// Observed failure rate over the batch, or zero for an empty batch.
    pub fn failure_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.failures as f64 / self.runs as f64
        }
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- Diagnostic for {} runs ----", self.runs)?;
        writeln!(
            f,
            "Adjustment at {:.1}%: \u{00b1}{:.2}%",
            self.chance * 100.0,
            self.adjustment_at_chance * 100.0
        )?;
        for (i, (chance, adjustment)) in self.adjustment_examples.iter().enumerate() {
            if i > 0 {
                write!(f, "  //  ")?;
            }
            write!(
                f,
                "{:.0}%: \u{00b1}{:.2}%",
                chance * 100.0,
                adjustment * 100.0
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Expected successes: {} ({:.1}%)",
            self.expected_successes,
            self.chance * 100.0
        )?;
        writeln!(
            f,
            "Successes: {} ({:.1}%) longest streak: {} ({} unadjusted)",
            self.successes,
            self.success_rate() * 100.0,
            self.longest_success_streak,
            self.baseline_success_streak
        )?;
        write!(
            f,
            "Failures: {} ({:.1}%) longest streak: {} ({} unadjusted)",
            self.failures,
            self.failure_rate() * 100.0,
            self.longest_failure_streak,
            self.baseline_failure_streak
        )
    }
}

impl<R: RandomProvider + Default> StreakSampler<R> {
    /// Collect a [`DiagnosticReport`] for `runs` trials at `chance`.
    ///
    /// Builds a sibling engine sharing this sampler's adjuster but with
    /// its own independent streak state and random source; this sampler
    /// itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::ChanceOutOfRange`] if `chance` is not
    /// within `[0, 1]`.
    pub fn diagnostic(&self, chance: f64, runs: u64) -> Result<DiagnosticReport, SamplerError> {
        DiagnosticReport::collect(
            self.shared_adjuster(),
            R::default(),
            R::default(),
            chance,
            runs,
        )
    }
}

/// Longest-run bookkeeping for a boolean sequence.
#[derive(Debug, Default, Clone, Copy)]
struct StreakTally {
    current_successes: u64,
    current_failures: u64,
    longest_successes: u64,
    longest_failures: u64,
}

impl StreakTally {
    fn record(&mut self, success: bool) {
        if success {
            self.current_successes += 1;
            self.current_failures = 0;
            self.longest_successes = self.longest_successes.max(self.current_successes);
        } else {
            self.current_failures += 1;
            self.current_successes = 0;
            self.longest_failures = self.longest_failures.max(self.current_failures);
        }
    }
}

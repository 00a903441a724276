//! Streak-tracking outcome sampler.
//!
//! [`StreakSampler`] is the engine: it owns a signed streak counter, an
//! [`Adjuster`] strategy, and a [`RandomProvider`] source. Each roll
//! computes an effective chance by compounding the adjustment once per
//! unit of streak magnitude, draws a single uniform value, and updates the
//! streak from the outcome.
//!
//! ## Streak bookkeeping
//!
//! The counter's sign encodes the outcome class (negative for failures,
//! positive for successes) and its magnitude the consecutive count. An
//! outcome that opposes a nonzero streak resets the counter to zero rather
//! than flipping its sign, so the roll immediately after a flip is
//! unadjusted; only the next same-class outcome starts counting again.
//! From a zero streak, either outcome starts a streak of magnitude one
//! right away.

use std::sync::Arc;

use tracing::trace;

use crate::adjuster::{Adjuster, SteppedAdjuster};
use crate::error::SamplerError;
use crate::random::{RandomProvider, ThreadRandomProvider};

/// Boolean outcome sampler that biases against long streaks.
///
/// The nominal chance passed to [`next`](Self::next) is honored exactly
/// whenever the streak is zero; otherwise the adjuster compounds against
/// the streak, raising the effective chance during failure runs and
/// lowering it during success runs.
///
/// Each instance is an independent unit: its streak and random source are
/// mutated in place with no internal locking, so concurrent correlated
/// sequences need one instance each.
///
/// # Example
///
/// ```rust
/// use fairroll::{ParabolicAdjuster, StreakSampler};
///
/// let mut sampler = StreakSampler::with_adjuster(ParabolicAdjuster);
/// for _ in 0..10 {
///     let _ = sampler.next(0.3)?;
/// }
/// sampler.reset();
/// assert_eq!(sampler.streak(), 0);
/// # Ok::<(), fairroll::SamplerError>(())
/// ```
pub struct StreakSampler<R = ThreadRandomProvider> {
    streak: i64,
    adjuster: Arc<dyn Adjuster>,
    random: R,
}

impl StreakSampler<ThreadRandomProvider> {
    /// Create a sampler with the default [`SteppedAdjuster`] and the
    /// production thread-local random source.
    pub fn new() -> Self {
        Self::with_adjuster(SteppedAdjuster)
    }

    /// Create a sampler with the given adjuster and the production
    /// thread-local random source.
    pub fn with_adjuster(adjuster: impl Adjuster + 'static) -> Self {
        Self::from_parts(Arc::new(adjuster), ThreadRandomProvider::new())
    }
}

impl Default for StreakSampler<ThreadRandomProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomProvider> StreakSampler<R> {
    /// Create a sampler from a shared adjuster and an explicit random
    /// source.
    ///
    /// This is the fully injectable constructor used by tests and by the
    /// diagnostic report, which builds a sibling engine sharing only the
    /// adjuster.
    pub fn from_parts(adjuster: Arc<dyn Adjuster>, random: R) -> Self {
        Self {
            streak: 0,
            adjuster,
            random,
        }
    }

    /// Generate the next outcome for the given success chance.
    ///
    /// Applies the streak-compounded adjustment, clamps the result into
    /// `[0, 1]`, consumes exactly one draw from the random source, and
    /// updates the streak to reflect the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::ChanceOutOfRange`] if `chance` is not
    /// within `[0, 1]`; nothing is mutated and no draw is consumed.
    pub fn next(&mut self, chance: f64) -> Result<bool, SamplerError> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(SamplerError::ChanceOutOfRange { chance });
        }

        let effective = self.compound(chance);
        let draw = self.random.random_ratio();
        let success = draw <= effective;

        if success {
            self.streak = if self.streak >= 0 { self.streak + 1 } else { 0 };
        } else {
            self.streak = if self.streak <= 0 { self.streak - 1 } else { 0 };
        }

        trace!(
            chance,
            effective,
            draw,
            success,
            streak = self.streak,
            "sampled outcome"
        );
        Ok(success)
    }

    /// The adjusted, clamped chance the next roll would use, without
    /// consuming a draw or mutating any state.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::ChanceOutOfRange`] if `chance` is not
    /// within `[0, 1]`.
    pub fn effective_chance(&self, chance: f64) -> Result<f64, SamplerError> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(SamplerError::ChanceOutOfRange { chance });
        }
        Ok(self.compound(chance))
    }

    /// Clear the memory of previous outcomes.
    ///
    /// Guarantees the immediately following [`next`](Self::next) call uses
    /// its chance unmodified. The adjuster and random source are kept.
    pub fn reset(&mut self) {
        self.streak = 0;
    }

    /// Replace the adjuster in place, keeping the current streak.
    ///
    /// Builder-style: returns `self` for chaining.
    pub fn set_adjuster(&mut self, adjuster: impl Adjuster + 'static) -> &mut Self {
        self.adjuster = Arc::new(adjuster);
        self
    }

    /// Current streak counter: negative for consecutive failures, positive
    /// for consecutive successes, zero after a flip or reset.
    pub fn streak(&self) -> i64 {
        self.streak
    }

    pub(crate) fn shared_adjuster(&self) -> Arc<dyn Adjuster> {
        Arc::clone(&self.adjuster)
    }

    /// Compound the adjustment once per unit of streak magnitude.
    ///
    /// Intermediate values are fed back into the adjuster unclamped; the
    /// clamp into [0, 1] happens once, after the loop.
    fn compound(&self, chance: f64) -> f64 {
        let mut adjusted = chance;
        if self.streak < 0 {
            for _ in 0..self.streak.unsigned_abs() {
                adjusted += self.adjuster.adjust(adjusted);
            }
        } else {
            for _ in 0..self.streak {
                adjusted -= self.adjuster.adjust(adjusted);
            }
        }
        adjusted.clamp(0.0, 1.0)
    }
}

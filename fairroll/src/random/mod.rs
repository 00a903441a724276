//! Random source provider abstraction.
//!
//! This module provides a provider pattern for the sampler's source of
//! uniform randomness, so the same engine code runs against the real
//! thread-local RNG in production and against seeded or scripted sources
//! in tests.

use std::cell::RefCell;

use rand::Rng;

mod scripted;
mod seeded;

pub use scripted::ScriptedRandomProvider;
pub use seeded::SeededRandomProvider;

/// Provider trait for uniform random draws.
///
/// This trait abstracts the sampler's randomness to enable both real and
/// deterministic sources in a unified way. Implementations handle the
/// source of randomness appropriate for their environment.
pub trait RandomProvider: Clone {
    /// Generate a uniform random f64 in `[0, 1)`.
    ///
    /// This is the single draw consumed by each sampler roll.
    fn random_ratio(&self) -> f64;
}

/// Production random provider using thread-local RNG.
///
/// Uses `rand::rng()` (thread-local, non-cryptographic) for efficient
/// random number generation in production environments.
///
/// # Example
///
/// ```rust
/// use fairroll::{RandomProvider, ThreadRandomProvider};
///
/// let random = ThreadRandomProvider::new();
/// let ratio = random.random_ratio();
/// assert!((0.0..1.0).contains(&ratio));
/// ```
#[derive(Clone, Default)]
pub struct ThreadRandomProvider;

impl ThreadRandomProvider {
    /// Create a new production random provider.
    pub fn new() -> Self {
        Self
    }
}

// Thread-local RNG for ThreadRandomProvider
thread_local! {
    static RNG: RefCell<rand::rngs::ThreadRng> = RefCell::new(rand::rng());
}

impl RandomProvider for ThreadRandomProvider {
    fn random_ratio(&self) -> f64 {
        RNG.with(|rng| rng.borrow_mut().random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_provider_ratio_range() {
        let random = ThreadRandomProvider::new();
        for _ in 0..1000 {
            let ratio = random.random_ratio();
            assert!((0.0..1.0).contains(&ratio));
        }
    }
}

//! Scripted end-to-end traces through the sampler.
//!
//! These tests drive the engine with fully scripted draw sequences and
//! assert the exact streak counter and effective chance after every step,
//! including the one-roll lag when an outcome breaks a streak.

use std::sync::Arc;

use fairroll::{ScriptedRandomProvider, SteppedAdjuster, StreakSampler};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_full_trace_with_stepped_adjuster() {
    let random = ScriptedRandomProvider::new([0.9, 0.95, 0.9, 0.5, 0.4, 0.45]);
    let mut sampler = StreakSampler::from_parts(Arc::new(SteppedAdjuster), random.clone());

    // failure: 0.9 > 0.5
    assert_close(sampler.effective_chance(0.5).unwrap(), 0.5);
    assert_eq!(sampler.next(0.5), Ok(false));
    assert_eq!(sampler.streak(), -1);

    // failure: 0.95 > 0.5 + 0.1
    assert_close(sampler.effective_chance(0.5).unwrap(), 0.6);
    assert_eq!(sampler.next(0.5), Ok(false));
    assert_eq!(sampler.streak(), -2);

    // failure: 0.9 > 0.6 + 0.05
    assert_close(sampler.effective_chance(0.5).unwrap(), 0.65);
    assert_eq!(sampler.next(0.5), Ok(false));
    assert_eq!(sampler.streak(), -3);

    // success breaks the failure streak: counter goes to 0, not +1
    assert_close(sampler.effective_chance(0.5).unwrap(), 0.7);
    assert_eq!(sampler.next(0.5), Ok(true));
    assert_eq!(sampler.streak(), 0);

    // the roll right after the flip is unadjusted
    assert_close(sampler.effective_chance(0.5).unwrap(), 0.5);
    assert_eq!(sampler.next(0.5), Ok(true));
    assert_eq!(sampler.streak(), 1);

    // success streak lowers the effective chance; 0.45 > 0.4 fails and
    // the flip again passes through 0
    assert_close(sampler.effective_chance(0.5).unwrap(), 0.4);
    assert_eq!(sampler.next(0.5), Ok(false));
    assert_eq!(sampler.streak(), 0);

    assert_eq!(random.remaining(), 0);
}

#[test]
fn test_reset_matches_fresh_sampler() {
    let mut used = StreakSampler::from_parts(
        Arc::new(SteppedAdjuster),
        ScriptedRandomProvider::new([0.9, 0.9, 0.9, 0.1, 0.2]),
    );
    for _ in 0..5 {
        used.next(0.5).unwrap();
    }
    assert_ne!(used.streak(), 0);
    used.reset();

    let fresh = StreakSampler::from_parts(
        Arc::new(SteppedAdjuster),
        ScriptedRandomProvider::new([]),
    );
    for chance in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
        assert_eq!(
            used.effective_chance(chance),
            fresh.effective_chance(chance)
        );
        assert_eq!(used.effective_chance(chance), Ok(chance));
    }
}

#[test]
fn test_each_roll_consumes_one_draw() {
    let random = ScriptedRandomProvider::new([0.5; 10]);
    let mut sampler = StreakSampler::from_parts(Arc::new(SteppedAdjuster), random.clone());
    for i in 0..10 {
        sampler.next(0.5).unwrap();
        assert_eq!(random.remaining(), 9 - i);
    }
}

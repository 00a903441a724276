//! Scripted random provider replaying a fixed draw sequence.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::RandomProvider;

/// Test double that replays a caller-supplied sequence of draws.
///
/// Each call to [`random_ratio`](RandomProvider::random_ratio) pops the
/// next scripted value. Clones share the remaining script.
///
/// # Panics
///
/// Panics when the script is exhausted, or at construction if any draw is
/// outside `[0, 1)`. Both are programmer errors in a test, not runtime
/// conditions.
#[derive(Clone)]
pub struct ScriptedRandomProvider {
    draws: Rc<RefCell<VecDeque<f64>>>,
}

impl ScriptedRandomProvider {
    /// Create a provider that replays `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        let draws: VecDeque<f64> = draws.into_iter().collect();
        assert!(
            draws.iter().all(|draw| (0.0..1.0).contains(draw)),
            "scripted draws must be within [0, 1)"
        );
        Self {
            draws: Rc::new(RefCell::new(draws)),
        }
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.borrow().len()
    }
}

impl RandomProvider for ScriptedRandomProvider {
    fn random_ratio(&self) -> f64 {
        self.draws
            .borrow_mut()
            .pop_front()
            .expect("scripted draw sequence exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let random = ScriptedRandomProvider::new([0.1, 0.9, 0.5]);
        assert_eq!(random.remaining(), 3);
        assert_eq!(random.random_ratio(), 0.1);
        assert_eq!(random.random_ratio(), 0.9);
        assert_eq!(random.random_ratio(), 0.5);
        assert_eq!(random.remaining(), 0);
    }

    #[test]
    fn test_clone_shares_script() {
        let a = ScriptedRandomProvider::new([0.2, 0.4]);
        let b = a.clone();
        assert_eq!(a.random_ratio(), 0.2);
        assert_eq!(b.random_ratio(), 0.4);
    }

    #[test]
    #[should_panic(expected = "scripted draw sequence exhausted")]
    fn test_exhausted_script_panics() {
        let random = ScriptedRandomProvider::new([0.5]);
        random.random_ratio();
        random.random_ratio();
    }

    #[test]
    #[should_panic(expected = "scripted draws must be within [0, 1)")]
    fn test_out_of_range_draw_rejected() {
        ScriptedRandomProvider::new([0.5, 1.0]);
    }
}

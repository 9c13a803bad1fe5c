//! Random source for the next-quiz-question picker
//!
//! Provides a trait for choosing among candidates, with:
//! - Thread-RNG implementation for production
//! - Seeded implementation for reproducible runs and tests

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one index out of `len` candidates
pub trait QuestionPicker: Send + Sync {
    /// Returns an index in `0..len`, or `None` when `len` is 0.
    fn pick(&self, len: usize) -> Option<usize>;
}

/// Uniform choice from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl QuestionPicker for RandomPicker {
    fn pick(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(rand::thread_rng().gen_range(0..len))
    }
}

/// Uniform choice from a seeded RNG; the same seed yields the same sequence
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl QuestionPicker for SeededPicker {
    fn pick(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Some(rng.gen_range(0..len))
    }
}

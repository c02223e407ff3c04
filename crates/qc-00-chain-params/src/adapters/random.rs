//! Random Source Adapters

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Production random source backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn rand_below(&self, max: u64) -> u64 {
        if max == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..max)
    }
}

/// Random source that always yields the same value (reduced modulo `max`).
///
/// ```rust
/// use qc_00_chain_params::adapters::FixedRandomSource;
/// use qc_00_chain_params::ports::RandomSource;
///
/// let rng = FixedRandomSource::new(42);
/// assert_eq!(rng.rand_below(100), 42);
/// assert_eq!(rng.rand_below(10), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRandomSource {
    value: u64,
}

impl FixedRandomSource {
    pub fn new(value: u64) -> Self {
        Self { value }
    }
}

impl RandomSource for FixedRandomSource {
    fn rand_below(&self, max: u64) -> u64 {
        if max == 0 {
            0
        } else {
            self.value % max
        }
    }
}

/// Reproducible pseudo-random source for tests that need varied draws.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn rand_below(&self, max: u64) -> u64 {
        if max == 0 {
            return 0;
        }
        self.rng.lock().gen_range(0..max)
    }
}

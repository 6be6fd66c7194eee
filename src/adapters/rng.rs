use crate::core::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// [`RandomSource`] backed by a `rand` generator.
///
/// `random_range` samples integers with a widening multiply and rejects the
/// biased zone (Lemire's method), so indices carry no modulo bias.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn from_seed_or_os(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index_below(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

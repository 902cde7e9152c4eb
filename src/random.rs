//! A single, explicitly-threaded random number source (spec.md §5).
//!
//! No operation reaches for a global or thread-local RNG; every function
//! that draws randomness takes a `&mut GaRng` parameter, mirroring the
//! teacher's `MOORandomGenerator` role in `moors::random`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Wraps a seedable, reproducible PRNG stream.
///
/// Construct with [`GaRng::from_seed`] for deterministic reruns (scenario E6
/// in spec.md §8), or with [`GaRng::from_os_entropy`] to draw a fresh seed
/// once at driver start (spec.md §5).
#[derive(Debug, Clone)]
pub struct GaRng {
    seed: u64,
    inner: StdRng,
}

impl GaRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a fresh seed from OS entropy and derives the PRNG from it.
    pub fn from_os_entropy() -> Self {
        let seed = rand::thread_rng().gen::<u64>();
        Self::from_seed(seed)
    }

    /// The seed this generator was constructed from — recoverable so a
    /// caller can log it or replay a run exactly.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A fair coin flip, used by population initialisation (spec.md §4.4).
    pub fn gen_bool(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Uniform draw in `[0.0, 1.0)`, used wherever a rate is compared
    /// against a probability (crossover, mutation).
    pub fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform integer draw in `[low, high)`.
    pub fn gen_range(&mut self, low: usize, high: usize) -> usize {
        self.inner.gen_range(low..high)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

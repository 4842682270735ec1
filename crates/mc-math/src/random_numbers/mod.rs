//! Random and quasi-random number generators.
//!
//! The pseudo-random side wraps the `rand_mt` Mersenne Twister behind a
//! uniform-deviate interface; the quasi-random side provides Sobol and
//! Halton low-discrepancy sequences. Normal variates are obtained by the
//! callers, either by sampling `rand_distr::StandardNormal` from the
//! twister or by pushing quasi-random uniforms through the inverse normal
//! CDF.

use mc_core::Real;
use rand_mt::Mt19937GenRand64;

pub mod halton;
pub mod sobol;

pub use halton::HaltonSequence;
pub use sobol::SobolSequence;

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        let u: u64 = self.rng.next_u64();
        u as f64 / (u64::MAX as f64 + 1.0)
    }
}

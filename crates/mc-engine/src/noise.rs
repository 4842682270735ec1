//! Noise sources — the strategies producing the driving noise matrix.
//!
//! A [`NoiseSource`] yields a `(step_count + 1) × path_count` matrix of
//! standard-normal variates, indexed `[step, path]`. Row 0 corresponds to
//! `t = 0` and is ignored by the path simulator (no increment is applied
//! there).
//!
//! Three strategies are provided behind the one trait, so the simulation
//! pipeline is a single algorithm rather than one branch per mode:
//!
//! * [`PseudoRandomNoise`] — independent draws (MT19937-64 through
//!   `rand_distr::StandardNormal`)
//! * [`SobolNoise`] — scrambled Sobol points through the inverse normal
//!   CDF; requires a power-of-two path count
//! * [`HaltonNoise`] — optionally scrambled Halton points through the
//!   inverse normal CDF
//!
//! Low-discrepancy points trade strict path independence for uniformity:
//! integration error improves from O(n^-1/2) toward O(n^-1) for smooth
//! payoffs, but the downstream standard-error formula assumes independence
//! and is only a heuristic diagnostic under these two sources.

use mc_core::{ensure, Real, Result, Size};
use mc_math::random_numbers::{HaltonSequence, MersenneTwisterUniformRng, SobolSequence};
use mc_math::{normal_cdf_inverse, Matrix};
use rand::Rng;
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;

/// Sampling-mode selector for the driving noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    /// Independent pseudo-random draws.
    PseudoRandom,
    /// Scrambled Sobol low-discrepancy points (power-of-two path count).
    Sobol,
    /// Scrambled Halton low-discrepancy points.
    Halton,
}

/// Capability: produce a matrix of standard-normal driving variables.
pub trait NoiseSource {
    /// Produce a `(step_count + 1) × path_count` standard-normal matrix.
    fn sample(&mut self, step_count: Size, path_count: Size) -> Result<Matrix>;
}

// ── Pseudo-random ─────────────────────────────────────────────────────────────

/// Independent standard-normal draws from a seeded Mersenne Twister.
pub struct PseudoRandomNoise {
    rng: Mt19937GenRand64,
}

impl PseudoRandomNoise {
    /// Create a source with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }
}

impl NoiseSource for PseudoRandomNoise {
    fn sample(&mut self, step_count: Size, path_count: Size) -> Result<Matrix> {
        let mut noise = Matrix::zeros(step_count + 1, path_count);
        for p in 0..path_count {
            for k in 0..=step_count {
                noise[(k, p)] = self.rng.sample(StandardNormal);
            }
        }
        Ok(noise)
    }
}

// ── Low-discrepancy ───────────────────────────────────────────────────────────

/// Sobol low-discrepancy noise.
///
/// Each path is one Sobol point in `step_count + 1` dimensions. The path
/// count must be an exact power of two (`2^m`), the counts at which the
/// base-2 Sobol construction is balanced.
pub struct SobolNoise {
    scramble_seed: Option<u64>,
}

impl SobolNoise {
    /// Scramble with a seeded Cranley-Patterson rotation.
    pub fn scrambled(seed: u64) -> Self {
        Self {
            scramble_seed: Some(seed),
        }
    }

    /// Use the raw, unscrambled sequence.
    pub fn raw() -> Self {
        Self {
            scramble_seed: None,
        }
    }
}

impl NoiseSource for SobolNoise {
    fn sample(&mut self, step_count: Size, path_count: Size) -> Result<Matrix> {
        ensure!(
            path_count.is_power_of_two(),
            "Sobol sampling requires a power-of-two path count, got {path_count}"
        );
        let dimension = step_count + 1;
        let mut seq = SobolSequence::new(dimension, 0);
        let shift = rotation_shift(self.scramble_seed, dimension);
        Ok(inverse_normal_matrix(
            || seq.next_sequence(),
            &shift,
            path_count,
        ))
    }
}

/// Halton low-discrepancy noise.
///
/// Each path is one Halton point over the first `step_count + 1` primes.
/// Any path count is allowed.
pub struct HaltonNoise {
    scramble_seed: Option<u64>,
}

impl HaltonNoise {
    /// Scramble with a seeded Cranley-Patterson rotation.
    pub fn scrambled(seed: u64) -> Self {
        Self {
            scramble_seed: Some(seed),
        }
    }

    /// Use the raw, unscrambled sequence.
    pub fn raw() -> Self {
        Self {
            scramble_seed: None,
        }
    }
}

impl NoiseSource for HaltonNoise {
    fn sample(&mut self, step_count: Size, path_count: Size) -> Result<Matrix> {
        let dimension = step_count + 1;
        let mut seq = HaltonSequence::new(dimension, 0);
        let shift = rotation_shift(self.scramble_seed, dimension);
        Ok(inverse_normal_matrix(
            || seq.next_sequence(),
            &shift,
            path_count,
        ))
    }
}

// ── Shared transform ──────────────────────────────────────────────────────────

/// Margin keeping clamped uniforms strictly inside the unit interval,
/// where the inverse CDF is finite.
const UNIT_MARGIN: Real = 1e-12;

/// Per-dimension Cranley-Patterson rotation offsets (zeros when
/// unscrambled).
fn rotation_shift(seed: Option<u64>, dimension: Size) -> Vec<Real> {
    match seed {
        Some(seed) => {
            let mut rng = MersenneTwisterUniformRng::new(seed);
            (0..dimension).map(|_| rng.next_real()).collect()
        }
        None => vec![0.0; dimension],
    }
}

/// Fill a noise matrix from a point generator: shift each coordinate mod 1,
/// clamp to the open unit interval, and invert the normal CDF.
fn inverse_normal_matrix<F: FnMut() -> Vec<Real>>(
    mut next_point: F,
    shift: &[Real],
    path_count: Size,
) -> Matrix {
    let dimension = shift.len();
    let mut noise = Matrix::zeros(dimension, path_count);
    for p in 0..path_count {
        let point = next_point();
        for k in 0..dimension {
            let u = (point[k] + shift[k]).fract();
            let u = u.clamp(UNIT_MARGIN, 1.0 - UNIT_MARGIN);
            noise[(k, p)] = normal_cdf_inverse(u);
        }
    }
    noise
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::Error;
    use mc_math::Statistics;

    fn moments(noise: &Matrix) -> Statistics {
        let mut stats = Statistics::new();
        for k in 0..noise.rows() {
            for p in 0..noise.cols() {
                stats.add(noise[(k, p)]);
            }
        }
        stats
    }

    #[test]
    fn pseudo_random_shape_and_moments() {
        let mut src = PseudoRandomNoise::new(42);
        let noise = src.sample(20, 500).unwrap();
        assert_eq!(noise.rows(), 21);
        assert_eq!(noise.cols(), 500);
        let stats = moments(&noise);
        assert!(stats.mean().unwrap().abs() < 0.05);
        assert!((stats.std_dev().unwrap() - 1.0).abs() < 0.05);
    }

    #[test]
    fn pseudo_random_is_seeded() {
        let a = PseudoRandomNoise::new(7).sample(5, 16).unwrap();
        let b = PseudoRandomNoise::new(7).sample(5, 16).unwrap();
        assert_eq!(a, b);
        let c = PseudoRandomNoise::new(8).sample(5, 16).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn sobol_rejects_non_power_of_two() {
        let mut src = SobolNoise::scrambled(1);
        let err = src.sample(10, 1000).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(src.sample(10, 1024).is_ok());
    }

    #[test]
    fn sobol_shape_and_moments() {
        let mut src = SobolNoise::scrambled(42);
        let noise = src.sample(10, 1024).unwrap();
        assert_eq!(noise.rows(), 11);
        assert_eq!(noise.cols(), 1024);
        let stats = moments(&noise);
        assert!(stats.mean().unwrap().abs() < 0.05);
        assert!((stats.std_dev().unwrap() - 1.0).abs() < 0.05);
    }

    #[test]
    fn halton_allows_any_path_count() {
        let mut src = HaltonNoise::scrambled(42);
        let noise = src.sample(6, 1000).unwrap();
        assert_eq!(noise.rows(), 7);
        assert_eq!(noise.cols(), 1000);
        let stats = moments(&noise);
        assert!(stats.mean().unwrap().abs() < 0.1);
        assert!((stats.std_dev().unwrap() - 1.0).abs() < 0.1);
    }

    #[test]
    fn all_values_finite() {
        let sources: Vec<Box<dyn NoiseSource>> = vec![
            Box::new(PseudoRandomNoise::new(3)),
            Box::new(SobolNoise::raw()),
            Box::new(HaltonNoise::raw()),
        ];
        for mut src in sources {
            let noise = src.sample(12, 256).unwrap();
            for k in 0..noise.rows() {
                for p in 0..noise.cols() {
                    assert!(noise[(k, p)].is_finite());
                }
            }
        }
    }

    #[test]
    fn scrambling_changes_the_points() {
        let raw = SobolNoise::raw().sample(4, 64).unwrap();
        let scrambled = SobolNoise::scrambled(11).sample(4, 64).unwrap();
        assert_ne!(raw, scrambled);
        // but the same scramble seed reproduces
        let again = SobolNoise::scrambled(11).sample(4, 64).unwrap();
        assert_eq!(scrambled, again);
    }
}

//! # mc-math
//!
//! Numeric substrate for mcoption: the `Matrix` newtype (over nalgebra),
//! the standard normal distribution, pseudo- and quasi-random number
//! generators, and a statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Two-dimensional matrix of reals.
pub mod matrix;

/// Random and quasi-random number generators.
pub mod random_numbers;

/// Statistics accumulator.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use matrix::Matrix;
pub use statistics::Statistics;

//! # mc-engine
//!
//! Monte Carlo pricing of European call options under geometric Brownian
//! motion, with quasi-random sampling and variance reduction.
//!
//! The engine is an explicit pipeline of pure stages:
//!
//! * [`scenario::Scenario`] — the validated parameter set for one run
//! * [`noise::NoiseSource`] — pseudo-random, Sobol, or Halton
//!   standard-normal driving matrices
//! * [`simulator`] — discretised GBM price paths (and antithetic mirrors)
//! * [`control_variate`] — the cumulative delta-hedge control variate
//! * [`payoff`] — discounted payoff estimators with standard errors
//! * [`model::McModel`] — the orchestrator wiring the stages together
//!
//! Every stage returns a fresh matrix rather than mutating its input, so
//! a path pair can feed several estimator variants in one run.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Black-Scholes closed-form helpers (d1, delta, call price).
pub mod analytics;

/// Delta-hedge control-variate accumulation.
pub mod control_variate;

/// The pricing pipeline orchestrator.
pub mod model;

/// Noise sources: the strategies producing driving noise.
pub mod noise;

/// Discounted payoff estimators.
pub mod payoff;

/// Scenario parameters and validation.
pub mod scenario;

/// GBM path simulation.
pub mod simulator;

/// Implied-volatility boundary trait.
pub mod volatility;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use model::{McModel, SimulationOutput};
pub use noise::{NoiseSource, SamplingMode};
pub use payoff::{EstimatorResult, VarianceReduction};
pub use scenario::Scenario;

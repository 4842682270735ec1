//! # mcoption
//!
//! Monte Carlo pricing of European call options under geometric Brownian
//! motion, with quasi-random sampling (Sobol, Halton) and variance
//! reduction (antithetic variates, delta-hedge control variate).
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `mc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use mcoption::engine::{McModel, SamplingMode, Scenario, VarianceReduction};
//!
//! let scenario = Scenario::new(100.0, 100.0, 0.2, 0.05, 16, 1024, 1.0).unwrap();
//! let model = McModel::new(
//!     SamplingMode::Sobol,
//!     VarianceReduction::Combined,
//!     42,
//! );
//! let result = model.price(&scenario).unwrap();
//! assert!(result.price > 0.0);
//! assert!(result.standard_error >= 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use mc_core as core;

/// Mathematical utilities: matrix, distributions, RNG, statistics.
pub use mc_math as math;

/// The simulation and estimation engine.
pub use mc_engine as engine;

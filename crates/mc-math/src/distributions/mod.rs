//! Probability distributions.
//!
//! Only the standard normal is needed here; it is hand-rolled (rational
//! approximations) rather than delegated to a distributions crate, since
//! the inverse CDF sits in the quasi-random hot path.

pub mod normal;

pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};

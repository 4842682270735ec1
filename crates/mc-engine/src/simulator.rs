//! GBM path simulation.
//!
//! Turns a driving-noise matrix into discretised geometric Brownian
//! motion price paths under the risk-neutral measure. With
//! `nu = r - sigma²/2` the log-price increment at step `k >= 1` is
//!
//! ```text
//! d(ln S)[k, p] = nu·dt + sigma·√dt·Z[k, p]
//! ```
//!
//! accumulated down each path from `ln(spot)` and exponentiated. Because
//! the log-increment distribution is exact (not an Euler approximation of
//! the price SDE), paths have the exact GBM distribution at every step.
//!
//! Both entry points are pure functions: the same scenario and noise
//! matrix produce bit-identical price matrices.

use crate::scenario::Scenario;
use mc_core::{ensure, Real, Result};
use mc_math::Matrix;

/// Simulate a price matrix of shape `(step_count + 1, path_count)` from a
/// noise matrix of the same shape.
///
/// Row 0 equals `spot` for every path: `t = 0` carries no randomness, so
/// row 0 of the noise matrix is ignored.
pub fn simulate_paths(scenario: &Scenario, noise: &Matrix) -> Result<Matrix> {
    scenario.validate()?;
    ensure!(
        noise.rows() == scenario.step_count + 1 && noise.cols() == scenario.path_count,
        "noise matrix is {}x{}, scenario requires {}x{}",
        noise.rows(),
        noise.cols(),
        scenario.step_count + 1,
        scenario.path_count
    );

    let dt = scenario.dt();
    let nu = scenario.risk_free_rate - 0.5 * scenario.volatility * scenario.volatility;
    let drift = nu * dt;
    let diffusion = scenario.volatility * dt.sqrt();
    let log_spot = scenario.spot.ln();

    let mut prices = Matrix::zeros(noise.rows(), noise.cols());
    for p in 0..scenario.path_count {
        prices[(0, p)] = scenario.spot;
        let mut log_price: Real = log_spot;
        for k in 1..=scenario.step_count {
            log_price += drift + diffusion * noise[(k, p)];
            prices[(k, p)] = log_price.exp();
        }
    }
    Ok(prices)
}

/// Simulate the primary price matrix and its antithetic mirror.
///
/// The mirror is driven by the exact negation of the noise matrix, giving
/// a path pair perfectly negatively correlated in the driving noise; the
/// payoff estimator averages the pair to cancel variance.
pub fn simulate_antithetic_paths(
    scenario: &Scenario,
    noise: &Matrix,
) -> Result<(Matrix, Matrix)> {
    let primary = simulate_paths(scenario, noise)?;
    let mirror = simulate_paths(scenario, &-noise)?;
    Ok((primary, mirror))
}

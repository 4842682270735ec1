//! Delta-hedge control variate.
//!
//! Along each simulated path, a delta hedge is rebalanced at every step:
//! hold `delta_k = N(d1)` units of the underlying over the transition
//! `k -> k+1` and accrue the hedge gain against risk-free growth,
//!
//! ```text
//! cv_increment[k, p] = delta_k · (S[k+1, p] - S[k, p]·e^{r·dt})
//! ```
//!
//! The running sum of these increments is a discrete analogue of the
//! self-financing identity, so its terminal value has expectation zero
//! under the risk-neutral measure. Subtracting it from the discounted
//! payoff removes the hedgeable share of payoff variance without biasing
//! the price estimate.

use crate::analytics::call_delta;
use crate::scenario::Scenario;
use mc_core::{ensure, Real, Result};
use mc_math::Matrix;

/// Build the control-variate matrix for a price matrix.
///
/// Returns a `(step_count, path_count)` matrix whose row `k` holds the
/// cumulative hedge gain over transitions `0..=k`. The remaining-time
/// schedule is linear, `tau_k = T·(1 - k/step_count)`: only full steps
/// with `tau_k > 0` are evaluated, so the `tau = 0` endpoint never enters
/// the `d1` division.
pub fn control_variates(scenario: &Scenario, prices: &Matrix) -> Result<Matrix> {
    scenario.validate()?;
    ensure!(
        prices.rows() == scenario.step_count + 1 && prices.cols() == scenario.path_count,
        "price matrix is {}x{}, scenario requires {}x{}",
        prices.rows(),
        prices.cols(),
        scenario.step_count + 1,
        scenario.path_count
    );

    let steps = scenario.step_count;
    let growth = (scenario.risk_free_rate * scenario.dt()).exp();
    let mut cv = Matrix::zeros(steps, scenario.path_count);

    for p in 0..scenario.path_count {
        let mut hedge_gain: Real = 0.0;
        for k in 0..steps {
            let tau = scenario.time_to_maturity * (1.0 - k as Real / steps as Real);
            let delta = call_delta(
                prices[(k, p)],
                scenario.strike,
                scenario.risk_free_rate,
                scenario.volatility,
                tau,
            );
            hedge_gain += delta * (prices[(k + 1, p)] - prices[(k, p)] * growth);
            cv[(k, p)] = hedge_gain;
        }
    }
    Ok(cv)
}

//! Black-Scholes closed-form helpers.
//!
//! The control-variate builder needs the hedge delta `N(d1)`, and the
//! convergence tests need the closed-form call price as a reference.
//! Everything here is call-only; there is no exercise style or dividend
//! yield in this engine.

use mc_core::{Rate, Real, Time, Volatility};
use mc_math::normal_cdf;

/// Total standard deviations below this are treated as degenerate (the
/// deterministic limit) rather than divided into `d1`.
const MIN_STD_DEV: Real = 1e-15;

/// The Black-Scholes `d1` term,
/// `(ln(S/K) + (r + sigma²/2)·tau) / (sigma·√tau)`.
///
/// Callers must ensure `sigma·√tau` is nonzero; [`call_delta`] handles
/// the degenerate case.
pub fn d1(spot: Real, strike: Real, rate: Rate, volatility: Volatility, tau: Time) -> Real {
    ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * tau)
        / (volatility * tau.sqrt())
}

/// The Black-Scholes call delta `N(d1)`.
///
/// When `sigma·√tau` vanishes (zero volatility or zero time remaining)
/// the delta degenerates to the exercise indicator: 1 if the path is
/// in the money, else 0.
pub fn call_delta(spot: Real, strike: Real, rate: Rate, volatility: Volatility, tau: Time) -> Real {
    let std_dev = volatility * tau.sqrt();
    if std_dev > MIN_STD_DEV {
        normal_cdf(d1(spot, strike, rate, volatility, tau))
    } else if spot > strike {
        1.0
    } else {
        0.0
    }
}

/// The Black-Scholes price of a European call.
pub fn black_call_price(
    spot: Real,
    strike: Real,
    rate: Rate,
    volatility: Volatility,
    tau: Time,
) -> Real {
    if tau <= 0.0 {
        return (spot - strike).max(0.0);
    }
    let discount = (-rate * tau).exp();
    let std_dev = volatility * tau.sqrt();
    if std_dev <= MIN_STD_DEV {
        // Deterministic limit: discounted forward intrinsic
        return (spot - strike * discount).max(0.0);
    }
    let d1 = d1(spot, strike, rate, volatility, tau);
    let d2 = d1 - std_dev;
    spot * normal_cdf(d1) - strike * discount * normal_cdf(d2)
}

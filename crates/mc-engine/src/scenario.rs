//! `Scenario` — the immutable parameter set for one pricing run.

use mc_core::{ensure, Rate, Real, Result, Size, Time, Volatility};

/// The full parameter set for one pricing run.
///
/// A passive value object consumed by every pipeline stage. Parameters
/// are validated up front ([`Scenario::validate`]); no stage starts
/// simulation work on an invalid scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Current underlying price.
    pub spot: Real,
    /// Option strike.
    pub strike: Real,
    /// Annualised constant GBM diffusion coefficient.
    pub volatility: Volatility,
    /// Annualised constant drift / discounting rate.
    pub risk_free_rate: Rate,
    /// Number of discrete time steps per path.
    pub step_count: Size,
    /// Number of simulated paths.
    pub path_count: Size,
    /// Total simulated horizon in years.
    pub time_to_maturity: Time,
}

impl Scenario {
    /// Create a validated scenario.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: Real,
        strike: Real,
        volatility: Volatility,
        risk_free_rate: Rate,
        step_count: Size,
        path_count: Size,
        time_to_maturity: Time,
    ) -> Result<Self> {
        let scenario = Self {
            spot,
            strike,
            volatility,
            risk_free_rate,
            step_count,
            path_count,
            time_to_maturity,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check the scenario invariants, failing fast on the first violation.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.spot.is_finite() && self.spot > 0.0,
            "spot must be positive, got {}",
            self.spot
        );
        ensure!(
            self.strike.is_finite() && self.strike > 0.0,
            "strike must be positive, got {}",
            self.strike
        );
        ensure!(
            self.volatility.is_finite() && self.volatility >= 0.0,
            "volatility must be non-negative, got {}",
            self.volatility
        );
        ensure!(
            self.risk_free_rate.is_finite(),
            "risk-free rate must be finite, got {}",
            self.risk_free_rate
        );
        ensure!(self.step_count >= 1, "step count must be at least 1");
        ensure!(self.path_count >= 1, "path count must be at least 1");
        ensure!(
            self.time_to_maturity.is_finite() && self.time_to_maturity > 0.0,
            "time to maturity must be positive, got {}",
            self.time_to_maturity
        );
        Ok(())
    }

    /// Time step size `T / step_count`.
    pub fn dt(&self) -> Time {
        self.time_to_maturity / self.step_count as Real
    }

    /// Discount factor to maturity, `e^{-rT}`.
    pub fn discount_factor(&self) -> Real {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }
}

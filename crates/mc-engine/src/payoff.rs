//! Discounted payoff estimators.
//!
//! Four estimator variants share the same discounting and error formula:
//! the price is the sample mean of the per-path discounted payoff, the
//! standard error is the unbiased sample standard deviation over
//! `√path_count`. The variants differ only in the per-path sample:
//!
//! * plain: `max(0, S_T - K)`
//! * antithetic: the pair average with the mirror path
//! * control-variate: payoff minus the terminal hedge gain
//! * combined: the pair average of control-variated payoffs
//!
//! All four are pure functions of their inputs. A non-finite price or
//! standard error is reported as [`mc_core::Error::NumericDegenerate`],
//! never as a normal number.

use crate::scenario::Scenario;
use mc_core::{ensure, fail_degenerate, Real, Result};
use mc_math::{Matrix, Statistics};

/// A price estimate and its standard error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorResult {
    /// Discounted expected payoff.
    pub price: Real,
    /// Standard error of the price estimate.
    pub standard_error: Real,
}

/// Variance-reduction selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceReduction {
    /// Discounted terminal payoff only.
    Plain,
    /// Average each payoff with its antithetic mirror.
    Antithetic,
    /// Subtract the terminal delta-hedge gain.
    ControlVariate,
    /// Antithetic pairing of control-variated payoffs.
    Combined,
}

/// Plain estimator: `e^{-rT} · max(0, S_T - K)` per path.
pub fn plain_estimate(scenario: &Scenario, prices: &Matrix) -> Result<EstimatorResult> {
    scenario.validate()?;
    check_price_shape(scenario, prices)?;
    let discount = scenario.discount_factor();
    let terminal = scenario.step_count;
    let mut stats = Statistics::new();
    for p in 0..scenario.path_count {
        let payoff = (prices[(terminal, p)] - scenario.strike).max(0.0);
        stats.add(discount * payoff);
    }
    finalize(&stats)
}

/// Antithetic estimator: the discounted average of each payoff with its
/// mirror-path payoff.
pub fn antithetic_estimate(
    scenario: &Scenario,
    prices: &Matrix,
    mirror: &Matrix,
) -> Result<EstimatorResult> {
    scenario.validate()?;
    check_price_shape(scenario, prices)?;
    check_price_shape(scenario, mirror)?;
    let discount = scenario.discount_factor();
    let terminal = scenario.step_count;
    let mut stats = Statistics::new();
    for p in 0..scenario.path_count {
        let payoff = (prices[(terminal, p)] - scenario.strike).max(0.0);
        let mirrored = (mirror[(terminal, p)] - scenario.strike).max(0.0);
        stats.add(discount * 0.5 * (payoff + mirrored));
    }
    finalize(&stats)
}

/// Control-variate estimator: the discounted payoff minus the terminal
/// hedge gain, whose expectation is zero.
pub fn control_variate_estimate(
    scenario: &Scenario,
    prices: &Matrix,
    control: &Matrix,
) -> Result<EstimatorResult> {
    scenario.validate()?;
    check_price_shape(scenario, prices)?;
    check_control_shape(scenario, control)?;
    let discount = scenario.discount_factor();
    let terminal = scenario.step_count;
    let cv_terminal = scenario.step_count - 1;
    let mut stats = Statistics::new();
    for p in 0..scenario.path_count {
        let payoff = (prices[(terminal, p)] - scenario.strike).max(0.0);
        stats.add(discount * (payoff - control[(cv_terminal, p)]));
    }
    finalize(&stats)
}

/// Combined estimator: antithetic pairing of control-variated payoffs.
pub fn combined_estimate(
    scenario: &Scenario,
    prices: &Matrix,
    mirror: &Matrix,
    control: &Matrix,
    mirror_control: &Matrix,
) -> Result<EstimatorResult> {
    scenario.validate()?;
    check_price_shape(scenario, prices)?;
    check_price_shape(scenario, mirror)?;
    check_control_shape(scenario, control)?;
    check_control_shape(scenario, mirror_control)?;
    let discount = scenario.discount_factor();
    let terminal = scenario.step_count;
    let cv_terminal = scenario.step_count - 1;
    let mut stats = Statistics::new();
    for p in 0..scenario.path_count {
        let payoff = (prices[(terminal, p)] - scenario.strike).max(0.0);
        let mirrored = (mirror[(terminal, p)] - scenario.strike).max(0.0);
        let sample = 0.5
            * (payoff + mirrored - control[(cv_terminal, p)] - mirror_control[(cv_terminal, p)]);
        stats.add(discount * sample);
    }
    finalize(&stats)
}

fn check_price_shape(scenario: &Scenario, prices: &Matrix) -> Result<()> {
    ensure!(
        prices.rows() == scenario.step_count + 1 && prices.cols() == scenario.path_count,
        "price matrix is {}x{}, scenario requires {}x{}",
        prices.rows(),
        prices.cols(),
        scenario.step_count + 1,
        scenario.path_count
    );
    Ok(())
}

fn check_control_shape(scenario: &Scenario, control: &Matrix) -> Result<()> {
    ensure!(
        control.rows() == scenario.step_count && control.cols() == scenario.path_count,
        "control-variate matrix is {}x{}, scenario requires {}x{}",
        control.rows(),
        control.cols(),
        scenario.step_count,
        scenario.path_count
    );
    Ok(())
}

fn finalize(stats: &Statistics) -> Result<EstimatorResult> {
    // path_count >= 1 is guaranteed by validation, so the mean exists;
    // a single path has no sample variance and reports zero error.
    let price = stats.mean().unwrap_or(0.0);
    let standard_error = stats.error_estimate().unwrap_or(0.0);
    if !price.is_finite() || !standard_error.is_finite() {
        fail_degenerate!(
            "estimator produced a non-finite result: price {price}, standard error {standard_error}"
        );
    }
    Ok(EstimatorResult {
        price,
        standard_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::black_call_price;
    use crate::control_variate::control_variates;
    use crate::noise::{NoiseSource, PseudoRandomNoise};
    use crate::simulator::{simulate_antithetic_paths, simulate_paths};
    use mc_core::Error;

    fn scenario(step_count: usize, path_count: usize) -> Scenario {
        Scenario {
            spot: 100.0,
            strike: 100.0,
            volatility: 0.2,
            risk_free_rate: 0.05,
            step_count,
            path_count,
            time_to_maturity: 1.0,
        }
    }

    /// All four estimates on one shared noise matrix.
    fn all_estimates(s: &Scenario, seed: u64) -> [EstimatorResult; 4] {
        let noise = PseudoRandomNoise::new(seed)
            .sample(s.step_count, s.path_count)
            .unwrap();
        let (prices, mirror) = simulate_antithetic_paths(s, &noise).unwrap();
        let cv = control_variates(s, &prices).unwrap();
        let mirror_cv = control_variates(s, &mirror).unwrap();
        [
            plain_estimate(s, &prices).unwrap(),
            antithetic_estimate(s, &prices, &mirror).unwrap(),
            control_variate_estimate(s, &prices, &cv).unwrap(),
            combined_estimate(s, &prices, &mirror, &cv, &mirror_cv).unwrap(),
        ]
    }

    #[test]
    fn plain_converges_to_black_scholes() {
        let s = scenario(50, 100_000);
        let noise = PseudoRandomNoise::new(42)
            .sample(s.step_count, s.path_count)
            .unwrap();
        let prices = simulate_paths(&s, &noise).unwrap();
        let result = plain_estimate(&s, &prices).unwrap();

        let reference = black_call_price(100.0, 100.0, 0.05, 0.2, 1.0);
        assert!(
            (result.price - reference).abs() < 3.0 * result.standard_error + 0.1,
            "MC price {} ± {} vs Black-Scholes {reference}",
            result.price,
            result.standard_error
        );
        assert!(result.standard_error > 0.0);
    }

    #[test]
    fn estimators_agree_on_shared_paths() {
        let s = scenario(25, 16_384);
        let estimates = all_estimates(&s, 42);
        for i in 0..4 {
            for j in (i + 1)..4 {
                let gap = (estimates[i].price - estimates[j].price).abs();
                let tolerance =
                    4.0 * (estimates[i].standard_error + estimates[j].standard_error) + 0.02;
                assert!(
                    gap < tolerance,
                    "estimators {i} and {j} disagree: {} vs {}",
                    estimates[i].price,
                    estimates[j].price
                );
            }
        }
    }

    #[test]
    fn variance_reduction_shrinks_standard_errors() {
        // In expectation over seeds: SE(antithetic) <= SE(plain),
        // SE(combined) <= SE(control-variate) and <= SE(antithetic).
        let s = scenario(25, 8_192);
        let mut se_sums = [0.0_f64; 4];
        for seed in 0..5 {
            let estimates = all_estimates(&s, seed);
            for (sum, e) in se_sums.iter_mut().zip(&estimates) {
                *sum += e.standard_error;
            }
        }
        let [plain, antithetic, control, combined] = se_sums;
        assert!(antithetic < plain, "SE(anti) {antithetic} vs SE(plain) {plain}");
        assert!(control < plain, "SE(cv) {control} vs SE(plain) {plain}");
        assert!(combined < control, "SE(comb) {combined} vs SE(cv) {control}");
        assert!(combined < antithetic, "SE(comb) {combined} vs SE(anti) {antithetic}");
    }

    #[test]
    fn single_path_reports_zero_error() {
        let s = scenario(10, 1);
        let noise = PseudoRandomNoise::new(1).sample(10, 1).unwrap();
        let prices = simulate_paths(&s, &noise).unwrap();
        let result = plain_estimate(&s, &prices).unwrap();
        assert!(result.price >= 0.0);
        assert_eq!(result.standard_error, 0.0);
    }

    #[test]
    fn non_finite_payoffs_are_flagged() {
        let s = scenario(10, 8);
        let prices = Matrix::from_element(11, 8, f64::NAN);
        let err = plain_estimate(&s, &prices).unwrap_err();
        assert!(matches!(err, Error::NumericDegenerate(_)));
    }

    #[test]
    fn shape_mismatches_are_rejected() {
        let s = scenario(10, 8);
        let wrong = Matrix::zeros(10, 8);
        assert!(matches!(
            plain_estimate(&s, &wrong),
            Err(Error::InvalidConfiguration(_))
        ));
        let prices = Matrix::from_element(11, 8, 100.0);
        let wrong_cv = Matrix::zeros(11, 8);
        assert!(matches!(
            control_variate_estimate(&s, &prices, &wrong_cv),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_volatility_prices_deterministically() {
        let s = Scenario {
            volatility: 0.0,
            ..scenario(10, 64)
        };
        let noise = PseudoRandomNoise::new(2).sample(10, 64).unwrap();
        let prices = simulate_paths(&s, &noise).unwrap();
        let result = plain_estimate(&s, &prices).unwrap();
        // e^{-rT}·(S·e^{rT} - K) = S - K·e^{-rT}
        let expected = 100.0 - 100.0 * (-0.05_f64).exp();
        assert!((result.price - expected).abs() < 1e-9);
        assert!(result.standard_error < 1e-12);
    }
}

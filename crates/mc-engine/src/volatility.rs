//! Implied-volatility boundary.
//!
//! The engine consumes a volatility value; where that value comes from a
//! quoted option price, the inversion lives with the caller behind
//! [`VolatilitySupplier`]. This crate ships the seam, not an
//! implementation.

use mc_core::{Rate, Real, Result, Time, Volatility};

/// European option flavour, as quoted by a volatility supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

/// An external source of implied volatility.
///
/// `rate_percent` is quoted in percent (5 ⇒ 5 %) and `days_to_maturity`
/// in calendar days, matching the conventions of quote feeds; the
/// returned volatility is an annualised fraction ready for a
/// [`crate::scenario::Scenario`].
pub trait VolatilitySupplier {
    /// Invert `observed_price` into an annualised volatility fraction.
    fn implied_volatility(
        &self,
        spot: Real,
        strike: Real,
        rate_percent: Rate,
        days_to_maturity: Time,
        observed_price: Real,
        option_type: OptionType,
    ) -> Result<Volatility>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::McModel;
    use crate::noise::SamplingMode;
    use crate::payoff::VarianceReduction;
    use crate::scenario::Scenario;

    /// A supplier returning a fixed volatility, standing in for a real
    /// quote-inversion service.
    struct FixedVol(Volatility);

    impl VolatilitySupplier for FixedVol {
        fn implied_volatility(
            &self,
            _spot: Real,
            _strike: Real,
            _rate_percent: Rate,
            _days_to_maturity: Time,
            _observed_price: Real,
            _option_type: OptionType,
        ) -> Result<Volatility> {
            Ok(self.0)
        }
    }

    #[test]
    fn supplied_volatility_feeds_a_scenario() {
        let supplier = FixedVol(0.2);
        let vol = supplier
            .implied_volatility(101.15, 98.01, 2.0, 61.0, 4.8, OptionType::Call)
            .unwrap();
        let scenario = Scenario::new(101.15, 98.01, vol, 0.01, 10, 1024, 61.0 / 365.0).unwrap();
        let model = McModel::new(SamplingMode::PseudoRandom, VarianceReduction::Plain, 42);
        let result = model.price(&scenario).unwrap();
        assert!(result.price > 0.0);
    }
}

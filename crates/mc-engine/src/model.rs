//! The pricing pipeline orchestrator.
//!
//! One algorithm parameterised over the noise strategy, instead of one
//! code path per sampling mode:
//!
//! ```text
//! Scenario -> NoiseSource -> simulator -> [control_variate] -> payoff
//! ```
//!
//! Every `price` call draws a fresh noise source from the configured
//! seed, so repeated calls with the same model and scenario reproduce the
//! same result.

use crate::control_variate::control_variates;
use crate::noise::{HaltonNoise, NoiseSource, PseudoRandomNoise, SamplingMode, SobolNoise};
use crate::payoff::{
    antithetic_estimate, combined_estimate, control_variate_estimate, plain_estimate,
    EstimatorResult, VarianceReduction,
};
use crate::scenario::Scenario;
use crate::simulator::{simulate_antithetic_paths, simulate_paths};
use mc_core::Result;
use mc_math::Matrix;

/// The raw simulated paths of one run, for callers that want to render or
/// post-process them. Mirror paths are present when the configured
/// variance reduction pairs paths antithetically.
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    /// Primary price matrix, `(step_count + 1) × path_count`.
    pub paths: Matrix,
    /// Antithetic mirror paths, when the variance reduction uses them.
    pub antithetic_paths: Option<Matrix>,
}

/// Monte Carlo pricing model: a sampling mode, a variance-reduction
/// choice, and a seed.
#[derive(Debug, Clone, Copy)]
pub struct McModel {
    sampling: SamplingMode,
    reduction: VarianceReduction,
    seed: u64,
}

impl McModel {
    /// Create a model.
    pub fn new(sampling: SamplingMode, reduction: VarianceReduction, seed: u64) -> Self {
        Self {
            sampling,
            reduction,
            seed,
        }
    }

    /// The configured sampling mode.
    pub fn sampling(&self) -> SamplingMode {
        self.sampling
    }

    /// The configured variance reduction.
    pub fn reduction(&self) -> VarianceReduction {
        self.reduction
    }

    /// A fresh noise source for one run. Pseudo-random noise is seeded
    /// directly; the low-discrepancy sources use the seed for their
    /// scrambling rotation.
    fn noise_source(&self) -> Box<dyn NoiseSource> {
        match self.sampling {
            SamplingMode::PseudoRandom => Box::new(PseudoRandomNoise::new(self.seed)),
            SamplingMode::Sobol => Box::new(SobolNoise::scrambled(self.seed)),
            SamplingMode::Halton => Box::new(HaltonNoise::scrambled(self.seed)),
        }
    }

    fn antithetic(&self) -> bool {
        matches!(
            self.reduction,
            VarianceReduction::Antithetic | VarianceReduction::Combined
        )
    }

    /// Simulate and return the raw price matrices without estimating.
    pub fn simulate(&self, scenario: &Scenario) -> Result<SimulationOutput> {
        scenario.validate()?;
        let noise = self
            .noise_source()
            .sample(scenario.step_count, scenario.path_count)?;
        if self.antithetic() {
            let (paths, mirror) = simulate_antithetic_paths(scenario, &noise)?;
            Ok(SimulationOutput {
                paths,
                antithetic_paths: Some(mirror),
            })
        } else {
            Ok(SimulationOutput {
                paths: simulate_paths(scenario, &noise)?,
                antithetic_paths: None,
            })
        }
    }

    /// Run the full pipeline for one scenario.
    pub fn price(&self, scenario: &Scenario) -> Result<EstimatorResult> {
        scenario.validate()?;
        let noise = self
            .noise_source()
            .sample(scenario.step_count, scenario.path_count)?;

        match self.reduction {
            VarianceReduction::Plain => {
                let prices = simulate_paths(scenario, &noise)?;
                plain_estimate(scenario, &prices)
            }
            VarianceReduction::Antithetic => {
                let (prices, mirror) = simulate_antithetic_paths(scenario, &noise)?;
                antithetic_estimate(scenario, &prices, &mirror)
            }
            VarianceReduction::ControlVariate => {
                let prices = simulate_paths(scenario, &noise)?;
                let control = control_variates(scenario, &prices)?;
                control_variate_estimate(scenario, &prices, &control)
            }
            VarianceReduction::Combined => {
                let (prices, mirror) = simulate_antithetic_paths(scenario, &noise)?;
                let control = control_variates(scenario, &prices)?;
                let mirror_control = control_variates(scenario, &mirror)?;
                combined_estimate(scenario, &prices, &mirror, &control, &mirror_control)
            }
        }
    }

    /// Price a list of scenarios in order, one result per scenario.
    ///
    /// Fails on the first invalid scenario, before any of the later ones
    /// are simulated.
    pub fn price_all(&self, scenarios: &[Scenario]) -> Result<Vec<EstimatorResult>> {
        for scenario in scenarios {
            scenario.validate()?;
        }
        scenarios.iter().map(|s| self.price(s)).collect()
    }
}

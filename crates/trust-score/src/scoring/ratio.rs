use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::domain::{round2, Metric};

/// Capability that reports how reliably a metric's control is satisfied.
///
/// Implementations return a ratio in `[0, 1]`. For mandatory metrics the ratio is a
/// binary gate: `1` when the control is implemented, `0` when it is not.
pub trait SuccessRatioProvider {
    fn ratio_for(&mut self, metric: &Metric) -> Result<f64, RatioError>;
}

/// Failure to obtain a ratio for a metric.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatioError {
    #[error("no measurement recorded for metric '{metric}'")]
    MissingMeasurement { metric: String },
}

/// Externally observed value for a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Measurement {
    Observed { successes: u64, attempts: u64 },
    Implemented(bool),
    Ratio(f64),
}

/// Provider backed by real observations collected over a reporting window.
#[derive(Debug, Clone, Default)]
pub struct MeasuredRatios {
    measurements: HashMap<String, Measurement>,
}

impl MeasuredRatios {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, measurement: Measurement) -> &mut Self {
        self.measurements.insert(name.into(), measurement);
        self
    }

    pub fn record_observations(
        &mut self,
        name: impl Into<String>,
        successes: u64,
        attempts: u64,
    ) -> &mut Self {
        self.record(
            name,
            Measurement::Observed {
                successes,
                attempts,
            },
        )
    }

    pub fn record_implemented(&mut self, name: impl Into<String>, implemented: bool) -> &mut Self {
        self.record(name, Measurement::Implemented(implemented))
    }

    pub fn record_ratio(&mut self, name: impl Into<String>, ratio: f64) -> &mut Self {
        self.record(name, Measurement::Ratio(ratio))
    }

    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.measurements.get(name)
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

impl SuccessRatioProvider for MeasuredRatios {
    fn ratio_for(&mut self, metric: &Metric) -> Result<f64, RatioError> {
        let missing = || RatioError::MissingMeasurement {
            metric: metric.name().to_string(),
        };

        match self.measurements.get(metric.name()) {
            Some(Measurement::Observed {
                successes,
                attempts,
            }) => {
                if *attempts == 0 {
                    return Err(missing());
                }
                // Clipped so an over-reported success count never exceeds 1.
                Ok((*successes).min(*attempts) as f64 / *attempts as f64)
            }
            Some(Measurement::Implemented(true)) => Ok(1.0),
            Some(Measurement::Implemented(false)) => Ok(0.0),
            Some(Measurement::Ratio(ratio)) => Ok(*ratio),
            None => Err(missing()),
        }
    }
}

/// Parameters for the simulated provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub total_attempts: u32,
    pub max_failure_limit: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            total_attempts: 100,
            max_failure_limit: 15,
        }
    }
}

/// Demonstration provider that fabricates ratios for optional metrics.
///
/// Mandatory metrics are always reported as implemented. Optional metrics lose
/// between one and `max_failure_limit` of `total_attempts` trials.
#[derive(Debug)]
pub struct SimulatedRatios<R> {
    parameters: SimulationParameters,
    rng: R,
}

impl<R: Rng> SimulatedRatios<R> {
    pub fn new(parameters: SimulationParameters, rng: R) -> Self {
        Self { parameters, rng }
    }

    pub fn parameters(&self) -> SimulationParameters {
        self.parameters
    }
}

impl SimulatedRatios<StdRng> {
    pub fn seeded(parameters: SimulationParameters, seed: u64) -> Self {
        Self::new(parameters, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(parameters: SimulationParameters) -> Self {
        Self::new(parameters, StdRng::from_entropy())
    }
}

impl<R: Rng> SuccessRatioProvider for SimulatedRatios<R> {
    fn ratio_for(&mut self, metric: &Metric) -> Result<f64, RatioError> {
        if metric.must_implement() {
            return Ok(1.0);
        }

        let SimulationParameters {
            total_attempts,
            max_failure_limit,
        } = self.parameters;
        if max_failure_limit == 0 || total_attempts == 0 {
            return Ok(1.0);
        }

        let failures = self.rng.gen_range(1..=max_failure_limit);
        let succeeded = total_attempts.saturating_sub(failures);
        Ok(round2(f64::from(succeeded) / f64::from(total_attempts)))
    }
}

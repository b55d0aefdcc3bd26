//! Metric registry, success-ratio providers, weighting, aggregation, and classification.

mod aggregate;
mod catalog;
mod classify;
pub mod domain;
mod ratio;
mod registry;
mod weight;

#[cfg(test)]
mod tests;

pub use aggregate::{AggregationResult, Aggregator, EvaluationError};
pub use classify::{classify, ClassificationBand, DataClass};
pub use domain::{round2, Metric, MetricDefinition};
pub use ratio::{
    MeasuredRatios, Measurement, RatioError, SimulatedRatios, SimulationParameters,
    SuccessRatioProvider,
};
pub use registry::{MetricRegistry, RegistryBuilder, RegistryError, MAX_MERIT_VALUE};
pub use weight::{WeightCalculator, DEFAULT_WEIGHT_CONSTANT};

use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Runs the one-shot pipeline: ratios, weights, aggregate, classify.
pub struct EvaluationEngine {
    aggregator: Aggregator,
}

impl EvaluationEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            aggregator: Aggregator::new(WeightCalculator::new(config.weight_constant)),
        }
    }

    pub fn weight_constant(&self) -> f64 {
        self.aggregator.calculator().weight_constant()
    }

    pub fn evaluate(
        &self,
        registry: &mut MetricRegistry,
        provider: &mut dyn SuccessRatioProvider,
    ) -> Result<EvaluationOutcome, EvaluationError> {
        let aggregation = self.aggregator.aggregate(registry, provider)?;
        let band = classify(aggregation.final_trust_score);

        info!(
            metrics = registry.len(),
            score = aggregation.final_trust_score,
            band = band.label(),
            "trust score evaluated"
        );

        Ok(EvaluationOutcome { aggregation, band })
    }
}

impl Default for EvaluationEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Aggregate totals together with the band they qualify for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub aggregation: AggregationResult,
    pub band: ClassificationBand,
}

impl EvaluationOutcome {
    pub fn final_trust_score(&self) -> f64 {
        self.aggregation.final_trust_score
    }
}

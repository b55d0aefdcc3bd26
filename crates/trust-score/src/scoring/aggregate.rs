use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::round2;
use super::ratio::{RatioError, SuccessRatioProvider};
use super::registry::MetricRegistry;
use super::weight::WeightCalculator;

/// Totals produced by a single aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub grand_total_weight: f64,
    pub sum_of_merit_value: f64,
    pub rejection_factor: u8,
    pub final_trust_score: f64,
    pub failed_mandatory_metrics: Vec<String>,
}

impl AggregationResult {
    pub fn is_rejected(&self) -> bool {
        self.rejection_factor == 0
    }
}

/// Combines per-metric weights into the provider's trust score.
///
/// Any mandatory metric reported as not implemented zeroes the score, no matter how
/// well the remaining metrics perform.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    calculator: WeightCalculator,
}

impl Aggregator {
    pub fn new(calculator: WeightCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &WeightCalculator {
        &self.calculator
    }

    pub fn aggregate(
        &self,
        registry: &mut MetricRegistry,
        provider: &mut dyn SuccessRatioProvider,
    ) -> Result<AggregationResult, EvaluationError> {
        // Every input is validated before the registry is touched.
        self.check_scale(registry)?;
        let ratios = collect_ratios(registry, provider)?;

        let mut grand_total_weight = 0.0;
        let mut sum_of_merit_value = 0.0;
        let mut failed_mandatory_metrics = Vec::new();

        for (metric, ratio) in registry.metrics_mut().iter_mut().zip(ratios) {
            metric.set_success_ratio(ratio);
            let weight = self.calculator.compute(metric);
            debug!(
                metric = metric.name(),
                merit_value = metric.merit_value(),
                success_ratio = ratio,
                total_weight = weight,
                "metric weighted"
            );

            grand_total_weight += weight;
            sum_of_merit_value += metric.merit_value();

            if metric.is_unimplemented_mandatory() {
                failed_mandatory_metrics.push(metric.name().to_string());
            }
        }

        let rejection_factor: u8 = if failed_mandatory_metrics.is_empty() {
            1
        } else {
            warn!(
                failed = ?failed_mandatory_metrics,
                "mandatory metrics not implemented, trust score rejected"
            );
            0
        };

        let grand_total_weight = round2(grand_total_weight);
        let final_trust_score =
            round2(grand_total_weight / sum_of_merit_value * f64::from(rejection_factor));
        if !grand_total_weight.is_finite() || !final_trust_score.is_finite() {
            return Err(self.overflow(sum_of_merit_value));
        }

        Ok(AggregationResult {
            grand_total_weight,
            sum_of_merit_value,
            rejection_factor,
            final_trust_score,
            failed_mandatory_metrics,
        })
    }

    /// The largest reachable grand total, scaled by `round2`, must stay finite.
    fn check_scale(&self, registry: &MetricRegistry) -> Result<(), EvaluationError> {
        let sum_of_merit_value = registry.sum_of_merit_value();
        let ceiling = self.calculator.weight_constant() * sum_of_merit_value * 100.0;
        if ceiling.is_finite() {
            Ok(())
        } else {
            Err(self.overflow(sum_of_merit_value))
        }
    }

    fn overflow(&self, sum_of_merit_value: f64) -> EvaluationError {
        EvaluationError::ScoreOverflow {
            weight_constant: self.calculator.weight_constant(),
            sum_of_merit_value,
        }
    }
}

fn collect_ratios(
    registry: &MetricRegistry,
    provider: &mut dyn SuccessRatioProvider,
) -> Result<Vec<f64>, EvaluationError> {
    registry
        .metrics()
        .iter()
        .map(|metric| {
            let ratio = provider.ratio_for(metric)?;

            if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
                return Err(EvaluationError::RatioOutOfRange {
                    metric: metric.name().to_string(),
                    ratio,
                });
            }

            if metric.must_implement() && ratio != 0.0 && ratio != 1.0 {
                return Err(EvaluationError::NonBinaryMandatoryRatio {
                    metric: metric.name().to_string(),
                    ratio,
                });
            }

            Ok(ratio)
        })
        .collect()
}

/// Failures that abort an evaluation before any score is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("success ratio {ratio} for metric '{metric}' is outside [0, 1]")]
    RatioOutOfRange { metric: String, ratio: f64 },
    #[error("mandatory metric '{metric}' reported ratio {ratio}; expected 0 (absent) or 1 (implemented)")]
    NonBinaryMandatoryRatio { metric: String, ratio: f64 },
    #[error("weight constant {weight_constant} over merit sum {sum_of_merit_value} overflows the score")]
    ScoreOverflow {
        weight_constant: f64,
        sum_of_merit_value: f64,
    },
    #[error(transparent)]
    Ratio(#[from] RatioError),
}

use crate::scoring::{ClassificationBand, DataClass, Metric};
use serde::Serialize;

/// Parameters that governed how success ratios were produced.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationView {
    pub total_attempts: u32,
    pub max_failure_limit: u32,
    pub weight_constant: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    pub name: String,
    pub weight_constant: f64,
    pub merit_value: f64,
    pub success_ratio: f64,
    pub total_weight: f64,
}

impl MetricRow {
    pub(crate) fn from_metric(metric: &Metric, weight_constant: f64) -> Self {
        Self {
            name: metric.name().to_string(),
            weight_constant,
            merit_value: metric.merit_value(),
            success_ratio: metric.success_ratio(),
            total_weight: metric.total_weight(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationView {
    pub band: ClassificationBand,
    pub label: &'static str,
    pub verdict: &'static str,
    pub eligible_data_classes: Vec<DataClass>,
}

impl ClassificationView {
    pub(crate) fn from_band(band: ClassificationBand) -> Self {
        Self {
            band,
            label: band.label(),
            verdict: band.verdict(),
            eligible_data_classes: band.eligible_data_classes().to_vec(),
        }
    }
}

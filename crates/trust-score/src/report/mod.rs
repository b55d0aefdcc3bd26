//! Presentation-ready view of an evaluated registry.

pub mod views;

use crate::scoring::{EvaluationOutcome, Metric, MetricRegistry, SimulationParameters};
use chrono::{DateTime, Utc};
use serde::Serialize;
use views::{ClassificationView, MetricRow, SimulationView};

/// Snapshot of one evaluation, grouped for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct TrustReport {
    pub generated_at: DateTime<Utc>,
    pub weight_constant: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationView>,
    pub mandatory_metrics: Vec<MetricRow>,
    pub optional_metrics: Vec<MetricRow>,
    pub metric_count: usize,
    pub sum_of_merit_value: f64,
    pub grand_total_weight: f64,
    pub rejection_factor: u8,
    pub final_trust_score: f64,
    pub classification: ClassificationView,
    pub failed_mandatory_metrics: Vec<String>,
}

impl TrustReport {
    pub fn build(
        registry: &MetricRegistry,
        outcome: &EvaluationOutcome,
        simulation: Option<SimulationParameters>,
        weight_constant: f64,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let rows = |metrics: Vec<&Metric>| -> Vec<MetricRow> {
            metrics
                .into_iter()
                .map(|metric| MetricRow::from_metric(metric, weight_constant))
                .collect()
        };
        let aggregation = &outcome.aggregation;

        Self {
            generated_at,
            weight_constant,
            simulation: simulation.map(|parameters| SimulationView {
                total_attempts: parameters.total_attempts,
                max_failure_limit: parameters.max_failure_limit,
                weight_constant,
            }),
            mandatory_metrics: rows(registry.mandatory()),
            optional_metrics: rows(registry.optional()),
            metric_count: registry.len(),
            sum_of_merit_value: aggregation.sum_of_merit_value,
            grand_total_weight: aggregation.grand_total_weight,
            rejection_factor: aggregation.rejection_factor,
            final_trust_score: aggregation.final_trust_score,
            classification: ClassificationView::from_band(outcome.band),
            failed_mandatory_metrics: aggregation.failed_mandatory_metrics.clone(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        !self.failed_mandatory_metrics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{
        ClassificationBand, EvaluationEngine, MeasuredRatios, MetricDefinition, MetricRegistry,
    };
    use chrono::TimeZone;

    #[test]
    fn report_groups_rows_by_mandatory_flag_in_registry_order() {
        let mut registry = MetricRegistry::from_definitions(vec![
            MetricDefinition::optional("Network_Failover", 24.0),
            MetricDefinition::mandatory("SSL/TLS", 25.0),
            MetricDefinition::optional("High_Availability", 24.0),
            MetricDefinition::mandatory("Encryption", 25.0),
        ])
        .expect("registry builds");
        let mut provider = MeasuredRatios::new();
        provider
            .record_observations("Network_Failover", 9, 10)
            .record_implemented("SSL/TLS", true)
            .record_observations("High_Availability", 1, 1)
            .record_implemented("Encryption", false);

        let outcome = EvaluationEngine::default()
            .evaluate(&mut registry, &mut provider)
            .expect("evaluation succeeds");
        let generated_at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let report = TrustReport::build(&registry, &outcome, None, 10.0, generated_at);

        let mandatory: Vec<&str> = report.mandatory_metrics.iter().map(|r| r.name.as_str()).collect();
        let optional: Vec<&str> = report.optional_metrics.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(mandatory, vec!["SSL/TLS", "Encryption"]);
        assert_eq!(optional, vec!["Network_Failover", "High_Availability"]);
        assert_eq!(report.metric_count, 4);
        assert!(report.is_rejected());
        assert_eq!(report.failed_mandatory_metrics, vec!["Encryption".to_string()]);
        assert_eq!(report.classification.band, ClassificationBand::NotConsiderable);
        assert!(report.simulation.is_none());
    }

    #[test]
    fn report_serializes_band_and_simulation_parameters() {
        let mut registry = MetricRegistry::from_definitions(vec![MetricDefinition::mandatory(
            "SSL/TLS", 25.0,
        )])
        .expect("registry builds");
        let mut provider = MeasuredRatios::new();
        provider.record_implemented("SSL/TLS", true);
        let outcome = EvaluationEngine::default()
            .evaluate(&mut registry, &mut provider)
            .expect("evaluation succeeds");

        let report = TrustReport::build(
            &registry,
            &outcome,
            Some(SimulationParameters::default()),
            10.0,
            Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        );
        let json = serde_json::to_value(&report).expect("report serializes");

        assert_eq!(json["classification"]["band"], "super");
        assert_eq!(json["final_trust_score"], 10.0);
        assert_eq!(json["simulation"]["total_attempts"], 100);
        assert_eq!(json["mandatory_metrics"][0]["total_weight"], 250.0);
    }
}

use crate::scoring::{MeasuredRatios, MetricDefinition, MetricRegistry};

pub(super) fn two_metric_registry() -> MetricRegistry {
    MetricRegistry::from_definitions(vec![
        MetricDefinition::mandatory("M1", 25.0),
        MetricDefinition::optional("M2", 25.0),
    ])
    .expect("registry builds")
}

pub(super) fn measured(m1_implemented: bool, m2_ratio: f64) -> MeasuredRatios {
    let mut provider = MeasuredRatios::new();
    provider
        .record_implemented("M1", m1_implemented)
        .record_ratio("M2", m2_ratio);
    provider
}

/// Mixed registry covering both groups with distinct merit values.
pub(super) fn mixed_registry() -> MetricRegistry {
    MetricRegistry::from_definitions(vec![
        MetricDefinition::mandatory("SSL/TLS", 25.0),
        MetricDefinition::optional("Weak_Passwords", 24.0),
        MetricDefinition::mandatory("Encryption", 25.0),
        MetricDefinition::optional("Network_Failover", 12.0),
        MetricDefinition::mandatory("Access_Control", 30.0),
    ])
    .expect("registry builds")
}

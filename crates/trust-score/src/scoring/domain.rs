use serde::{Deserialize, Serialize};

/// Provider-declared record used to register a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub name: String,
    pub merit_value: f64,
    pub must_implement: bool,
}

impl MetricDefinition {
    pub fn mandatory(name: impl Into<String>, merit_value: f64) -> Self {
        Self {
            name: name.into(),
            merit_value,
            must_implement: true,
        }
    }

    pub fn optional(name: impl Into<String>, merit_value: f64) -> Self {
        Self {
            name: name.into(),
            merit_value,
            must_implement: false,
        }
    }
}

/// Registered metric together with the values derived during the latest evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    name: String,
    merit_value: f64,
    must_implement: bool,
    success_ratio: f64,
    total_weight: f64,
}

impl Metric {
    pub(crate) fn from_definition(definition: MetricDefinition) -> Self {
        Self {
            name: definition.name,
            merit_value: definition.merit_value,
            must_implement: definition.must_implement,
            success_ratio: 0.0,
            total_weight: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn merit_value(&self) -> f64 {
        self.merit_value
    }

    pub fn must_implement(&self) -> bool {
        self.must_implement
    }

    pub fn success_ratio(&self) -> f64 {
        self.success_ratio
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Mandatory metric whose control is reported as absent.
    pub fn is_unimplemented_mandatory(&self) -> bool {
        self.must_implement && self.success_ratio == 0.0
    }

    pub(crate) fn set_success_ratio(&mut self, ratio: f64) {
        self.success_ratio = ratio;
    }

    pub(crate) fn set_total_weight(&mut self, weight: f64) {
        self.total_weight = weight;
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

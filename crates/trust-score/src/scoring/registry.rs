use super::catalog::standard_definitions;
use super::domain::{Metric, MetricDefinition};

/// Largest merit value a metric may carry. Keeps every scaled weight and the
/// merit sum comfortably inside `f64` range.
pub const MAX_MERIT_VALUE: f64 = 1.0e9;

/// Ordered set of metrics owned by a single evaluation run.
///
/// A registry always holds at least one metric, so the merit sum used as the
/// aggregate's divisor is never zero.
#[derive(Debug, Clone)]
pub struct MetricRegistry {
    metrics: Vec<Metric>,
}

impl MetricRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Reference catalog of security, reliability, and privacy metrics.
    pub fn standard() -> Self {
        Self::from_definitions(standard_definitions())
            .expect("standard catalog holds unique, positive-merit metrics")
    }

    pub fn from_definitions<I>(definitions: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = MetricDefinition>,
    {
        let mut builder = Self::builder();
        for definition in definitions {
            builder.register(definition)?;
        }
        builder.build()
    }

    /// Metrics in registration order.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn mandatory(&self) -> Vec<&Metric> {
        self.metrics
            .iter()
            .filter(|metric| metric.must_implement())
            .collect()
    }

    pub fn optional(&self) -> Vec<&Metric> {
        self.metrics
            .iter()
            .filter(|metric| !metric.must_implement())
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|metric| metric.name() == name)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn sum_of_merit_value(&self) -> f64 {
        self.metrics.iter().map(Metric::merit_value).sum()
    }

    pub(crate) fn metrics_mut(&mut self) -> &mut [Metric] {
        &mut self.metrics
    }
}

/// Collects metric definitions and validates each one as it is registered.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    metrics: Vec<Metric>,
}

impl RegistryBuilder {
    /// Register a metric. A rejected definition leaves the builder unchanged.
    pub fn register(&mut self, definition: MetricDefinition) -> Result<&mut Self, RegistryError> {
        let name = definition.name.trim().to_string();
        if name.is_empty() {
            return Err(RegistryError::InvalidMetric {
                name: definition.name,
                reason: "metric name must not be blank".to_string(),
            });
        }

        if !definition.merit_value.is_finite() || definition.merit_value <= 0.0 {
            return Err(RegistryError::InvalidMetric {
                name,
                reason: format!(
                    "merit value must be a positive number, got {}",
                    definition.merit_value
                ),
            });
        }

        if definition.merit_value > MAX_MERIT_VALUE {
            return Err(RegistryError::InvalidMetric {
                name,
                reason: format!(
                    "merit value {} exceeds the maximum of {}",
                    definition.merit_value, MAX_MERIT_VALUE
                ),
            });
        }

        if self.contains(&name) {
            return Err(RegistryError::DuplicateMetric { name });
        }

        self.metrics.push(Metric::from_definition(MetricDefinition {
            name,
            ..definition
        }));
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.metrics.iter().any(|metric| metric.name() == name)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn build(self) -> Result<MetricRegistry, RegistryError> {
        if self.metrics.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }

        Ok(MetricRegistry {
            metrics: self.metrics,
        })
    }
}

/// Validation failures raised while assembling a registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("metric '{name}' is already registered")]
    DuplicateMetric { name: String },
    #[error("metric '{name}' is invalid: {reason}")]
    InvalidMetric { name: String, reason: String },
    #[error("metric registry must contain at least one metric")]
    EmptyRegistry,
}

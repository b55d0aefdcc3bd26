use super::domain::{round2, Metric};

/// Reference scale constant applied uniformly to every metric.
pub const DEFAULT_WEIGHT_CONSTANT: f64 = 10.0;

/// Derives a metric's total weight from its merit value and success ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightCalculator {
    weight_constant: f64,
}

impl WeightCalculator {
    pub fn new(weight_constant: f64) -> Self {
        Self { weight_constant }
    }

    pub fn weight_constant(&self) -> f64 {
        self.weight_constant
    }

    /// Recompute and store the metric's total weight.
    pub fn compute(&self, metric: &mut Metric) -> f64 {
        let weight = round2(self.weight_constant * metric.merit_value() * metric.success_ratio());
        metric.set_total_weight(weight);
        weight
    }
}

impl Default for WeightCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT_CONSTANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::MetricDefinition;

    #[test]
    fn compute_refreshes_stored_weight() {
        let calculator = WeightCalculator::default();
        let mut metric = Metric::from_definition(MetricDefinition::optional("Network_Failover", 24.0));

        metric.set_success_ratio(0.91);
        assert_eq!(calculator.compute(&mut metric), 218.4);
        assert_eq!(metric.total_weight(), 218.4);

        metric.set_success_ratio(0.0);
        assert_eq!(calculator.compute(&mut metric), 0.0);
        assert_eq!(metric.total_weight(), 0.0);
    }

    #[test]
    fn weight_scales_with_constant() {
        let calculator = WeightCalculator::new(5.0);
        let mut metric = Metric::from_definition(MetricDefinition::mandatory("Encryption", 25.0));
        metric.set_success_ratio(1.0);

        assert_eq!(calculator.compute(&mut metric), 125.0);
    }
}

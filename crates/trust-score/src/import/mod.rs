//! CSV loaders that turn externally supplied definitions and measurements into
//! validated registry input.

mod parser;

use crate::scoring::{MeasuredRatios, MetricDefinition, MetricRegistry, RegistryError};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Registry(RegistryError),
    InvalidMeasurement { metric: String, reason: String },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read input file: {}", err),
            ImportError::Csv(err) => write!(f, "invalid CSV data: {}", err),
            ImportError::Registry(err) => write!(f, "rejected metric definition: {}", err),
            ImportError::InvalidMeasurement { metric, reason } => {
                write!(f, "invalid measurement for metric '{}': {}", metric, reason)
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            ImportError::Registry(err) => Some(err),
            ImportError::InvalidMeasurement { .. } => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<RegistryError> for ImportError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}

/// Loads a registry from `name,merit_value,must_implement` rows.
pub struct RegistryImporter;

impl RegistryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<MetricRegistry, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<MetricRegistry, ImportError> {
        let mut builder = MetricRegistry::builder();

        for record in parser::parse_registry(reader)? {
            let must_implement = parser::parse_flag(&record.must_implement).ok_or_else(|| {
                RegistryError::InvalidMetric {
                    name: record.name.clone(),
                    reason: format!(
                        "must_implement must be a boolean flag, got '{}'",
                        record.must_implement
                    ),
                }
            })?;

            builder.register(MetricDefinition {
                name: record.name,
                merit_value: record.merit_value,
                must_implement,
            })?;
        }

        let registry = builder.build()?;
        debug!(metrics = registry.len(), "metric registry imported");
        Ok(registry)
    }
}

/// Loads observed outcomes from `name,successes,attempts[,implemented]` rows.
///
/// A row with `implemented` set records a binary gate; otherwise both counts are required.
/// Each metric may appear in at most one row.
pub struct MeasurementImporter;

impl MeasurementImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<MeasuredRatios, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<MeasuredRatios, ImportError> {
        let mut measurements = MeasuredRatios::new();

        for record in parser::parse_measurements(reader)? {
            if measurements.get(&record.name).is_some() {
                return Err(ImportError::InvalidMeasurement {
                    metric: record.name,
                    reason: "metric appears in more than one row".to_string(),
                });
            }

            if let Some(raw) = record.implemented.as_deref() {
                let implemented =
                    parser::parse_flag(raw).ok_or_else(|| ImportError::InvalidMeasurement {
                        metric: record.name.clone(),
                        reason: format!("implemented must be a boolean flag, got '{raw}'"),
                    })?;
                measurements.record_implemented(record.name, implemented);
                continue;
            }

            match (record.successes, record.attempts) {
                (Some(successes), Some(attempts)) => {
                    measurements.record_observations(record.name, successes, attempts);
                }
                _ => {
                    return Err(ImportError::InvalidMeasurement {
                        metric: record.name,
                        reason: "successes and attempts are both required".to_string(),
                    })
                }
            }
        }

        debug!(measurements = measurements.len(), "measurements imported");
        Ok(measurements)
    }
}

use std::env;
use std::fmt;

use crate::scoring::{SimulationParameters, DEFAULT_WEIGHT_CONSTANT};

/// Top-level configuration for an evaluation run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scoring: ScoringConfig,
    pub simulation: SimulationConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let weight_constant = match env::var("TRUST_WEIGHT_CONSTANT") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidWeightConstant(raw.clone()))?,
            Err(_) => DEFAULT_WEIGHT_CONSTANT,
        };

        let defaults = SimulationParameters::default();
        let total_attempts = parse_u32("TRUST_TOTAL_ATTEMPTS", ConfigError::InvalidTotalAttempts)?
            .unwrap_or(defaults.total_attempts);
        let max_failure_limit =
            parse_u32("TRUST_MAX_FAILURE_LIMIT", ConfigError::InvalidFailureLimit)?
                .unwrap_or(defaults.max_failure_limit);

        let seed = match env::var("TRUST_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?,
            ),
            Err(_) => None,
        };

        let log_level = env::var("TRUST_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let config = Self {
            scoring: ScoringConfig { weight_constant },
            simulation: SimulationConfig {
                total_attempts,
                max_failure_limit,
                seed,
            },
            telemetry: TelemetryConfig { log_level },
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants; called again after CLI overrides are applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weight = self.scoring.weight_constant;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ConfigError::InvalidWeightConstant(weight.to_string()));
        }

        let SimulationConfig {
            total_attempts,
            max_failure_limit,
            ..
        } = self.simulation;
        if total_attempts == 0 {
            return Err(ConfigError::InvalidTotalAttempts(total_attempts.to_string()));
        }
        if max_failure_limit > total_attempts {
            return Err(ConfigError::FailureLimitExceedsAttempts {
                max_failure_limit,
                total_attempts,
            });
        }

        Ok(())
    }
}

fn parse_u32(
    key: &str,
    invalid: fn(String) -> ConfigError,
) -> Result<Option<u32>, ConfigError> {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<u32>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(invalid(raw)),
        },
        Err(_) => Ok(None),
    }
}

/// Scale constant applied to every metric's weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub weight_constant: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weight_constant: DEFAULT_WEIGHT_CONSTANT,
        }
    }
}

/// Settings for the simulated success-ratio provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub total_attempts: u32,
    pub max_failure_limit: u32,
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn parameters(&self) -> SimulationParameters {
        SimulationParameters {
            total_attempts: self.total_attempts,
            max_failure_limit: self.max_failure_limit,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeightConstant(String),
    InvalidTotalAttempts(String),
    InvalidFailureLimit(String),
    InvalidSeed(String),
    FailureLimitExceedsAttempts {
        max_failure_limit: u32,
        total_attempts: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeightConstant(value) => write!(
                f,
                "TRUST_WEIGHT_CONSTANT must be a positive number, got '{}'",
                value
            ),
            ConfigError::InvalidTotalAttempts(value) => write!(
                f,
                "TRUST_TOTAL_ATTEMPTS must be a positive integer, got '{}'",
                value
            ),
            ConfigError::InvalidFailureLimit(value) => write!(
                f,
                "TRUST_MAX_FAILURE_LIMIT must be a non-negative integer, got '{}'",
                value
            ),
            ConfigError::InvalidSeed(value) => {
                write!(f, "TRUST_SEED must be a valid u64, got '{}'", value)
            }
            ConfigError::FailureLimitExceedsAttempts {
                max_failure_limit,
                total_attempts,
            } => write!(
                f,
                "max failure limit {} exceeds total attempts {}",
                max_failure_limit, total_attempts
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

use crate::render::{render_json, render_text};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use trust_score::config::AppConfig;
use trust_score::error::AppError;
use trust_score::import::{MeasurementImporter, RegistryImporter};
use trust_score::report::TrustReport;
use trust_score::scoring::{
    EvaluationEngine, MetricRegistry, SimulatedRatios, SimulationParameters, SuccessRatioProvider,
};
use trust_score::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "trust-score",
    about = "Score a cloud service provider's security posture and map it to a data-classification band",
    version
)]
pub(crate) struct Cli {
    /// CSV registry with `name,merit_value,must_implement` columns (defaults to the built-in catalog)
    #[arg(long)]
    registry: Option<PathBuf>,
    /// CSV measurements with `name,successes,attempts[,implemented]` columns (defaults to simulation)
    #[arg(long)]
    measurements: Option<PathBuf>,
    /// Seed for the simulated success ratios
    #[arg(long)]
    seed: Option<u64>,
    /// Override the weight constant applied to every metric
    #[arg(long)]
    weight_constant: Option<f64>,
    /// Override the number of simulated attempts per metric
    #[arg(long)]
    total_attempts: Option<u32>,
    /// Override the maximum number of simulated failures per metric
    #[arg(long)]
    max_failures: Option<u32>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    telemetry::init(&config.telemetry)?;

    print!("{}", run_with(&cli, &config)?);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    apply_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

/// Import, evaluate, and render one report. Any rejected input surfaces as an error.
pub(crate) fn run_with(cli: &Cli, config: &AppConfig) -> Result<String, AppError> {
    let mut registry = match &cli.registry {
        Some(path) => RegistryImporter::from_path(path)?,
        None => MetricRegistry::standard(),
    };

    let (mut provider, simulation) = ratio_provider(cli, config)?;

    let engine = EvaluationEngine::new(config.scoring);
    let outcome = engine.evaluate(&mut registry, provider.as_mut())?;
    info!(
        score = outcome.final_trust_score(),
        rejected = outcome.aggregation.is_rejected(),
        "evaluation complete"
    );

    let report = TrustReport::build(
        &registry,
        &outcome,
        simulation,
        engine.weight_constant(),
        Utc::now(),
    );

    Ok(match cli.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => format!("{}\n", render_json(&report)?),
    })
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(weight_constant) = cli.weight_constant {
        config.scoring.weight_constant = weight_constant;
    }
    if let Some(total_attempts) = cli.total_attempts {
        config.simulation.total_attempts = total_attempts;
    }
    if let Some(max_failures) = cli.max_failures {
        config.simulation.max_failure_limit = max_failures;
    }
    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }
}

fn ratio_provider(
    cli: &Cli,
    config: &AppConfig,
) -> Result<(Box<dyn SuccessRatioProvider>, Option<SimulationParameters>), AppError> {
    if let Some(path) = &cli.measurements {
        let measurements = MeasurementImporter::from_path(path)?;
        return Ok((Box::new(measurements), None));
    }

    let parameters = config.simulation.parameters();
    let provider = match config.simulation.seed {
        Some(seed) => SimulatedRatios::seeded(parameters, seed),
        None => SimulatedRatios::from_entropy(parameters),
    };
    Ok((Box::new(provider), Some(parameters)))
}

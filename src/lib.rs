pub mod cli;
pub mod core;

use crate::cli::OutputFormat;
use crate::core::config::AppConfig;
use crate::core::yields::ProjectInputs;
use anyhow::Result;
use tracing::debug;

/// Commands that operate on project figures.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Evaluate a single project. `currency` falls back to the configured one.
    Calc {
        name: String,
        inputs: ProjectInputs,
        currency: Option<String>,
    },
    /// Evaluate every configured project.
    Summary,
    /// Explain development yield.
    Learn,
}

pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    match command {
        AppCommand::Calc {
            name,
            inputs,
            currency,
        } => {
            let config = load_optional_config(config_path)?;
            let currency = currency.unwrap_or(config.currency);
            cli::calc::run(
                &name,
                &inputs,
                &currency,
                &config.sensitivity.offsets(),
                format,
            )
        }
        AppCommand::Summary => {
            let config = match config_path {
                Some(path) => AppConfig::load_from_path(path)?,
                None => AppConfig::load()?,
            };
            debug!("Loaded config: {config:#?}");
            cli::summary::run(&config, format)
        }
        AppCommand::Learn => {
            cli::learn::run();
            Ok(())
        }
    }
}

/// Loads the configuration if one is given or present at the default location.
fn load_optional_config(config_path: Option<&str>) -> Result<AppConfig> {
    if let Some(path) = config_path {
        return AppConfig::load_from_path(path);
    }

    match AppConfig::default_config_path() {
        Ok(path) if path.exists() => AppConfig::load_from_path(path),
        _ => {
            debug!("No configuration found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

//! Command implementations
//!
//! Every command starts from the same merged configuration:
//! defaults < config file < STOWER_* environment < command line.

pub mod mappers;
pub mod process;
pub mod watch;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use stower::config::{Config, Settings};
use stower::{logging, MapperRegistry, PathMapper};

use crate::cli::Cli;

/// Load and merge configuration, then install logging.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let (config, warnings) =
        stower::config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let mut config = stower::config::with_env_overrides(config);
    config.apply_overrides(&cli.overrides());

    logging::init(config.debug);
    for warning in &warnings {
        warn!("{}", warning);
    }
    if config.debug {
        debug!("configuration:\n{}", config.to_yaml()?);
    }
    Ok(config)
}

/// Resolve settings and log them in debug mode.
pub fn resolve_settings(config: &Config) -> Result<Settings> {
    let settings = config.resolve()?;
    debug!(
        source = %settings.source_root.display(),
        destination = %settings.destination_root.display(),
        mode = %settings.transfer,
        dry_run = settings.dry_run,
        "resolved settings"
    );
    for scope in settings.scopes.iter() {
        debug!("root path mapping {}", scope);
    }
    Ok(settings)
}

/// Pick the mapper named in the settings.
pub fn select_mapper(settings: &Settings) -> Result<Arc<dyn PathMapper>> {
    let registry = MapperRegistry::builtin(settings.mtime_format.as_deref())?;
    let mapper = registry.resolve(settings.mapper.as_deref())?;
    info!(mapper = mapper.name(), "using mapper");
    Ok(mapper)
}

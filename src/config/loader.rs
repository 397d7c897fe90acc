//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StowerError, StowerResult};

use super::types::Config;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StowerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> StowerResult<(Config, Vec<ConfigWarning>)> {
    // An empty document deserializes as unit, not as a map.
    if content.trim().is_empty() {
        return Ok((Config::default(), Vec::new()));
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StowerError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file: explicit path, else `./config.yml` if it exists.
pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    default.is_file().then_some(default)
}

/// Load the discovered config file, or defaults when there is none.
pub fn load(explicit: Option<&Path>) -> StowerResult<(Config, Vec<ConfigWarning>)> {
    match discover(explicit) {
        Some(path) => load_with_warnings(&path),
        None => Ok((Config::default(), Vec::new())),
    }
}

/// Apply environment variable overrides (STOWER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(debug) = var("STOWER_DEBUG").as_deref().and_then(parse_bool) {
        config.debug = debug;
    }

    if let Some(copy) = var("STOWER_COPY").as_deref().and_then(parse_bool) {
        config.copy = copy;
    }

    if let Some(dry_run) = var("STOWER_DRY_RUN").as_deref().and_then(parse_bool) {
        config.dry_run = dry_run;
    }

    if let Some(mapper) = var("STOWER_MAPPER").filter(|m| !m.trim().is_empty()) {
        config.mapper = Some(mapper.trim().to_string());
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

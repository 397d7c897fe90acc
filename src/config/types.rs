//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ScopeMapping;
use crate::error::{StowerError, StowerResult};

/// Event queue capacity used when none (or a non-positive one) is configured
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 1000;

/// Watch mode configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Capacity of the event queue; events are dropped when it is full
    #[serde(alias = "eventbuffersize", skip_serializing_if = "Option::is_none")]
    pub event_buffer_size: Option<i64>,
}

/// Configuration as written in the YAML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest: Option<PathBuf>,

    pub debug: bool,

    /// Copy files instead of hard linking them
    pub copy: bool,

    #[serde(alias = "dryrun")]
    pub dry_run: bool,

    /// Registered mapper name or external executable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapper: Option<String>,

    /// strftime pattern for the `mtime` mapper
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime_format: Option<String>,

    /// Source prefix -> destination prefix
    #[serde(alias = "rootpathmappings", skip_serializing_if = "BTreeMap::is_empty")]
    pub root_path_mappings: BTreeMap<String, String>,

    pub watch: WatchConfig,
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub debug: bool,
    pub copy: bool,
    pub dry_run: bool,
    pub mapper: Option<String>,
    pub src: Option<PathBuf>,
    pub dest: Option<PathBuf>,
    pub event_buffer_size: Option<i64>,
}

/// How a file reaches its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMode {
    #[default]
    Link,
    Copy,
}

impl TransferMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferMode::Link => "link",
            TransferMode::Copy => "copy",
        }
    }
}

impl std::fmt::Display for TransferMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved, read-only settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub source_root: PathBuf,
    pub destination_root: PathBuf,
    pub transfer: TransferMode,
    pub dry_run: bool,
    pub debug: bool,
    pub scopes: ScopeMapping,
    pub mapper: Option<String>,
    pub mtime_format: Option<String>,
    pub event_buffer_size: usize,
}

impl Config {
    /// Apply command line values. Flags can only switch options on.
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        self.debug |= overrides.debug;
        self.copy |= overrides.copy;
        self.dry_run |= overrides.dry_run;

        if let Some(mapper) = overrides.mapper.as_ref().filter(|m| !m.is_empty()) {
            self.mapper = Some(mapper.clone());
        }
        if let Some(src) = &overrides.src {
            self.src = Some(src.clone());
        }
        if let Some(dest) = &overrides.dest {
            self.dest = Some(dest.clone());
        }
        if let Some(size) = overrides.event_buffer_size.filter(|size| *size > 0) {
            self.watch.event_buffer_size = Some(size);
        }
    }

    /// Render as YAML for debug output
    pub fn to_yaml(&self) -> StowerResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| StowerError::config(e.to_string()))
    }

    /// Resolve into immutable settings with absolute roots.
    pub fn resolve(&self) -> StowerResult<Settings> {
        let source = self
            .src
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| StowerError::config("source directory is required"))?;
        let destination = self
            .dest
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| StowerError::config("destination directory is required"))?;

        let event_buffer_size = self
            .watch
            .event_buffer_size
            .filter(|size| *size > 0)
            .and_then(|size| usize::try_from(size).ok())
            .unwrap_or(DEFAULT_EVENT_BUFFER_SIZE);

        Ok(Settings {
            source_root: std::path::absolute(source)?,
            destination_root: std::path::absolute(destination)?,
            transfer: if self.copy {
                TransferMode::Copy
            } else {
                TransferMode::Link
            },
            dry_run: self.dry_run,
            debug: self.debug,
            scopes: ScopeMapping::new(&self.root_path_mappings),
            mapper: self.mapper.clone().filter(|m| !m.is_empty()),
            mtime_format: self.mtime_format.clone(),
            event_buffer_size,
        })
    }
}

//! Configuration module for Stower
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STOWER_*)
//! 3. YAML config file (`--config`, else `./config.yml` when present)
//! 4. Built-in defaults (lowest priority)
//!
//! The merged [`Config`] is resolved once into immutable [`Settings`].

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, discover, load, load_with_warnings, with_env_overrides, ConfigWarning,
    DEFAULT_CONFIG_FILE,
};
pub use types::{
    CliOverrides, Config, Settings, TransferMode, WatchConfig, DEFAULT_EVENT_BUFFER_SIZE,
};

//! Error types for Stower
//!
//! `StowerError` covers the failures that end a run (configuration, startup,
//! directory traversal). Per-file failures live in [`PlacementError`] and
//! [`MapperError`] and never escape the placement pipeline.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::domain::ports::path_mapper::MapperError;

/// Result type alias for Stower operations
pub type StowerResult<T> = Result<T, StowerError>;

/// Errors that abort a whole run
#[derive(Error, Debug)]
pub enum StowerError {
    /// Invalid or incomplete configuration
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration file {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source directory missing in batch mode
    #[error("source directory {path} does not exist")]
    SourceNotFound { path: PathBuf },

    /// No mapper named and more than one registered
    #[error("mapper was not provided, valid mappers: {valid}")]
    NoMapperSelected { valid: String },

    /// Mapper name matches neither a registered mapper nor an executable
    #[error("mapper '{name}' does not exist, valid mappers: {valid}")]
    MapperNotFound { name: String, valid: String },

    /// Directory traversal failed in batch mode
    #[error("could not walk source directory {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Filesystem notifications could not be registered
    #[error("could not watch {path}: {source}")]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}

impl StowerError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        StowerError::Config {
            message: message.into(),
        }
    }
}

/// Per-file failure inside the placement pipeline
///
/// The file is skipped and processing continues with the next one.
#[derive(Error, Debug)]
pub enum PlacementError {
    /// Path is not below the configured source root
    #[error("{path} is not inside source directory {root}")]
    OutsideSource { path: PathBuf, root: PathBuf },

    /// A name below the source root is not valid UTF-8
    #[error("{path} has a name that is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },

    /// Scopes are configured but none matches the file
    #[error("no root path mapping found for {relative}")]
    NoScopeMatch { relative: String },

    /// The mapper could not produce a destination
    #[error(transparent)]
    Mapper(#[from] MapperError),

    /// Resolved destination leaves its permitted root
    #[error("destination {path} escapes {root}")]
    Containment { path: PathBuf, root: PathBuf },

    /// A filesystem operation failed
    #[error("failed to {op} {path}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlacementError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlacementError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

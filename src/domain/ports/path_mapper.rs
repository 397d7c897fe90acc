//! PathMapper port - pluggable destination naming
//!
//! A mapper turns one source file into a destination path relative to the
//! destination root (or to the matched scope's destination prefix). It may
//! read the file's metadata, parse its name, or ask an external program.
//! A failure only skips that file.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::services::ScopeMatch;
use crate::domain::value_objects::SourceReference;

/// Why a mapper could not place a file
#[derive(Error, Debug)]
pub enum MapperError {
    /// The file name does not follow the expected pattern
    #[error("{name} {reason}, ignoring")]
    UnparseableName { name: String, reason: String },

    /// A timestamp embedded in the file name could not be parsed
    #[error("couldn't parse date from {name}: {source}")]
    Timestamp {
        name: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The file's modification time is unavailable
    #[error("no modification time available for {path}")]
    MissingModified { path: PathBuf },

    /// The external mapper could not run or reported failure
    #[error("external mapper {executable} failed for {relative}: {reason}")]
    External {
        executable: String,
        relative: String,
        reason: String,
    },

    /// The mapper produced nothing usable
    #[error("mapper returned an empty destination")]
    EmptyResult,

    /// Failure reported by a caller-supplied mapper
    #[error("{0}")]
    Other(String),
}

/// Everything a mapper may consult for one file
#[derive(Debug, Clone, Copy)]
pub struct MapRequest<'a> {
    pub source: &'a SourceReference,
    pub scope: Option<&'a ScopeMatch>,
}

impl<'a> MapRequest<'a> {
    pub fn new(source: &'a SourceReference, scope: Option<&'a ScopeMatch>) -> Self {
        Self { source, scope }
    }

    /// Source path relative to the source root
    pub fn relative(&self) -> &'a str {
        self.source.relative()
    }

    pub fn absolute(&self) -> &'a Path {
        self.source.absolute()
    }

    pub fn base_name(&self) -> &'a str {
        self.source.base_name()
    }

    /// Matched scope's source prefix, empty when unscoped
    pub fn scope_source_prefix(&self) -> &'a str {
        self.scope.map(|m| m.source_prefix.as_str()).unwrap_or("")
    }

    /// Matched scope's destination prefix, empty when unscoped
    pub fn scope_destination_prefix(&self) -> &'a str {
        self.scope.map(|m| m.destination_prefix.as_str()).unwrap_or("")
    }

    /// Path relative to the matched scope, or to the source root when unscoped
    pub fn scoped_relative(&self) -> &'a str {
        self.scope
            .map(|m| m.relative.as_str())
            .unwrap_or_else(|| self.source.relative())
    }
}

/// Destination naming strategy
///
/// Exactly one mapper is selected per run.
pub trait PathMapper: Send + Sync {
    /// Registry name of this mapper
    fn name(&self) -> &str;

    /// Destination path relative to the destination root (plus scope prefix)
    fn map(&self, request: &MapRequest<'_>) -> Result<String, MapperError>;
}

/// Only the first line of a mapper result is honored.
pub fn first_line(output: &str) -> &str {
    output.lines().next().unwrap_or("")
}

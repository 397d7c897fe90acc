//! Per-file Placement Pipeline
//!
//! scope resolution -> mapper -> destination resolution -> placement
//!
//! Both dispatchers feed paths through [`PlacementPipeline::process_file`].
//! Per-file failures are logged and returned as a [`FileOutcome`]; they
//! never propagate further.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::placement::{PlacementAction, PlacementEngine, PlacementOptions};
use crate::config::{Settings, TransferMode};
use crate::domain::ports::{first_line, FileSystem, MapRequest, PathMapper};
use crate::domain::services::{DestinationResolver, ScopeResolution, ScopeResolver};
use crate::domain::value_objects::SourceReference;
use crate::error::PlacementError;
use crate::infrastructure::fs::LocalFs;

/// Why a path was not considered for placement at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Base name starts with `.`
    Hidden,
    /// Path is a directory
    Directory,
}

/// Result of running one path through the pipeline
#[derive(Debug)]
pub enum FileOutcome {
    /// Transferred (or would be, in a dry run)
    Placed {
        source: PathBuf,
        destination: PathBuf,
        mode: TransferMode,
        replaced: bool,
    },
    /// Destination already is the source file
    AlreadyPlaced { destination: PathBuf },
    Ignored { path: PathBuf, reason: IgnoreReason },
    /// Skipped because of a per-file failure
    Failed { path: PathBuf, error: PlacementError },
}

pub struct PlacementPipeline<F: FileSystem = LocalFs> {
    source_root: PathBuf,
    scopes: ScopeResolver,
    mapper: Arc<dyn PathMapper>,
    destinations: DestinationResolver,
    engine: PlacementEngine<F>,
}

impl PlacementPipeline<LocalFs> {
    /// Pipeline over the local file system.
    ///
    /// `source_root` is the root as the dispatcher sees it (canonical).
    pub fn new(settings: &Settings, source_root: PathBuf, mapper: Arc<dyn PathMapper>) -> Self {
        Self::with_fs(settings, source_root, mapper, LocalFs::new())
    }
}

impl<F: FileSystem> PlacementPipeline<F> {
    pub fn with_fs(
        settings: &Settings,
        source_root: PathBuf,
        mapper: Arc<dyn PathMapper>,
        fs: F,
    ) -> Self {
        Self {
            source_root,
            scopes: ScopeResolver::new(settings.scopes.clone()),
            mapper,
            destinations: DestinationResolver::new(&settings.destination_root),
            engine: PlacementEngine::new(
                fs,
                PlacementOptions {
                    mode: settings.transfer,
                    dry_run: settings.dry_run,
                },
            ),
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn destination_root(&self) -> &Path {
        self.destinations.root()
    }

    pub fn mapper(&self) -> &dyn PathMapper {
        self.mapper.as_ref()
    }

    /// Run one path through the pipeline and log the outcome.
    pub fn process_file(&self, path: &Path) -> FileOutcome {
        let outcome = match self.run(path) {
            Ok(outcome) => outcome,
            Err(error) => FileOutcome::Failed {
                path: path.to_path_buf(),
                error,
            },
        };
        log_outcome(&outcome);
        outcome
    }

    fn run(&self, path: &Path) -> Result<FileOutcome, PlacementError> {
        if PlacementEngine::<F>::is_ignored(path) {
            return Ok(FileOutcome::Ignored {
                path: path.to_path_buf(),
                reason: IgnoreReason::Hidden,
            });
        }

        let stat = self
            .engine
            .fs()
            .stat(path)
            .and_then(|stat| {
                stat.ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
            })
            .map_err(|e| PlacementError::io("stat", path, e))?;
        if stat.is_dir {
            return Ok(FileOutcome::Ignored {
                path: path.to_path_buf(),
                reason: IgnoreReason::Directory,
            });
        }

        if path
            .strip_prefix(&self.source_root)
            .is_ok_and(|rest| rest.to_str().is_none())
        {
            return Err(PlacementError::NonUtf8Path {
                path: path.to_path_buf(),
            });
        }
        let source = SourceReference::new(&self.source_root, path, stat).ok_or_else(|| {
            PlacementError::OutsideSource {
                path: path.to_path_buf(),
                root: self.source_root.clone(),
            }
        })?;

        let scope = match self.scopes.resolve(source.relative()) {
            ScopeResolution::Unscoped => None,
            ScopeResolution::Matched(m) => Some(m),
            ScopeResolution::NoMatch => {
                return Err(PlacementError::NoScopeMatch {
                    relative: source.relative().to_string(),
                })
            }
        };

        let mapped = self.mapper.map(&MapRequest::new(&source, scope.as_ref()))?;
        let destination = self
            .destinations
            .resolve(first_line(&mapped), scope.as_ref())?;

        let outcome = match self.engine.place(&source, &destination)? {
            PlacementAction::AlreadyPlaced => FileOutcome::AlreadyPlaced { destination },
            PlacementAction::Transferred { mode, replaced } => FileOutcome::Placed {
                source: path.to_path_buf(),
                destination,
                mode,
                replaced,
            },
        };
        Ok(outcome)
    }
}

fn log_outcome(outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Ignored { path, reason } => {
            debug!(path = %path.display(), ?reason, "ignoring");
        }
        FileOutcome::Failed { path, error } => match error {
            PlacementError::NoScopeMatch { relative } => {
                info!("no root path mapping found for {} (skipping)", relative);
            }
            PlacementError::Mapper(e) => {
                debug!(path = %path.display(), "{}", e);
            }
            PlacementError::OutsideSource { .. } => {
                debug!("{}", error);
            }
            PlacementError::NonUtf8Path { .. }
            | PlacementError::Containment { .. }
            | PlacementError::Io { .. } => {
                warn!(path = %path.display(), "{} (skipping)", error);
            }
        },
        FileOutcome::Placed { .. } | FileOutcome::AlreadyPlaced { .. } => {}
    }
}

//! Placement Engine
//!
//! Makes a destination path reflect a source file with as little file
//! system mutation as possible:
//!
//! 1. Hidden files (`.` prefix, e.g. partial rsync transfers) are ignored
//! 2. Destination parent directories are created
//! 3. An existing destination that is the same file is left alone; any
//!    other existing file is removed
//! 4. The source is hard linked (default) or copied
//!
//! Every mutation is gated by the dry-run flag individually. The decisions
//! around them still run so a dry run previews a real one.

use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::config::TransferMode;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::SourceReference;
use crate::error::PlacementError;

/// What the engine did (or would do, in a dry run) for one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementAction {
    /// Destination already is the source file
    AlreadyPlaced,
    /// Source was transferred; `replaced` when a stale file was removed first
    Transferred { mode: TransferMode, replaced: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementOptions {
    pub mode: TransferMode,
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct PlacementEngine<F: FileSystem> {
    fs: F,
    options: PlacementOptions,
}

impl<F: FileSystem> PlacementEngine<F> {
    pub fn new(fs: F, options: PlacementOptions) -> Self {
        Self { fs, options }
    }

    pub fn options(&self) -> PlacementOptions {
        self.options
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Files whose base name starts with `.` are never placed.
    pub fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().starts_with('.'))
            .unwrap_or(false)
    }

    /// Place `source` at the already validated `destination`.
    pub fn place(
        &self,
        source: &SourceReference,
        destination: &Path,
    ) -> Result<PlacementAction, PlacementError> {
        let dry_run = self.options.dry_run;

        if let Some(parent) = destination.parent() {
            if dry_run {
                debug!(directory = %parent.display(), dry_run, "would ensure destination directory");
            } else {
                self.fs
                    .create_dir_all(parent)
                    .map_err(|e| PlacementError::io("create directory", parent, e))?;
            }
        }

        let mut replaced = false;
        let existing = self
            .fs
            .stat(destination)
            .map_err(|e| PlacementError::io("stat", destination, e))?;

        if let Some(existing) = existing {
            if source.stat().same_file(&existing) {
                debug!(
                    destination = %destination.display(),
                    dry_run,
                    "destination exists and is the same as source, skipping"
                );
                return Ok(PlacementAction::AlreadyPlaced);
            }
            if existing.is_dir {
                return Err(PlacementError::io(
                    "replace",
                    destination,
                    io::Error::other("destination is a directory"),
                ));
            }

            if dry_run {
                debug!(
                    destination = %destination.display(),
                    dry_run,
                    "destination exists and differs from source, would delete"
                );
            } else {
                debug!(
                    destination = %destination.display(),
                    "destination exists and differs from source, deleting"
                );
                self.fs
                    .remove_file(destination)
                    .map_err(|e| PlacementError::io("delete", destination, e))?;
            }
            replaced = true;
        }

        let mode = self.options.mode;
        if dry_run {
            info!(
                source = %source.absolute().display(),
                destination = %destination.display(),
                dry_run,
                "would {}",
                mode
            );
        } else {
            info!(
                "{} --{}--> {}",
                source.absolute().display(),
                mode,
                destination.display()
            );
            match mode {
                TransferMode::Link => self
                    .fs
                    .hard_link(source.absolute(), destination)
                    .map_err(|e| PlacementError::io("link", destination, e))?,
                TransferMode::Copy => {
                    self.fs
                        .copy(source.absolute(), destination)
                        .map_err(|e| PlacementError::io("copy", destination, e))?;
                }
            }
        }

        Ok(PlacementAction::Transferred { mode, replaced })
    }
}

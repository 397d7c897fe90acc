//! Batch Processing
//!
//! Walks the whole source tree once and runs every non-directory entry
//! through the placement pipeline, in directory traversal order.
//!
//! A traversal error ends the run. Per-file failures only skip the file.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::application::pipeline::PlacementPipeline;
use crate::application::report::RunReport;
use crate::config::Settings;
use crate::domain::ports::{FileSystem, PathMapper};
use crate::error::{StowerError, StowerResult};

/// Place every file currently below the source root.
pub fn process(settings: &Settings, mapper: Arc<dyn PathMapper>) -> StowerResult<RunReport> {
    let source_root = existing_source_root(&settings.source_root)?;
    let pipeline = PlacementPipeline::new(settings, source_root, mapper);
    process_tree(&pipeline)
}

/// Walk `pipeline`'s source root and process each file serially.
pub fn process_tree<F: FileSystem>(pipeline: &PlacementPipeline<F>) -> StowerResult<RunReport> {
    let root = pipeline.source_root();
    info!(
        source = %root.display(),
        destination = %pipeline.destination_root().display(),
        mapper = pipeline.mapper().name(),
        "processing source directory"
    );

    let mut report = RunReport::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| StowerError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        let outcome = pipeline.process_file(entry.path());
        report.record(&outcome);
    }

    info!("{}", report);
    Ok(report)
}

fn existing_source_root(root: &Path) -> StowerResult<std::path::PathBuf> {
    if !root.is_dir() {
        return Err(StowerError::SourceNotFound {
            path: root.to_path_buf(),
        });
    }
    let canonical = root.canonicalize()?;
    debug!(source = %canonical.display(), "resolved source directory");
    Ok(canonical)
}

//! Stower - relocate files into computed destination paths
//!
//! Stower watches (or walks once) a source directory and places every file
//! at a destination computed by a pluggable [`PathMapper`], by hard link or
//! copy. Placement is idempotent, contained to the destination root, and
//! fully previewable with dry-run.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{
    process, FileOutcome, MapperRegistry, PlacementPipeline, RunReport, WatchEvent, WatchUseCase,
};
pub use config::{Config, Settings, TransferMode};
pub use domain::ports::{MapRequest, PathMapper};
pub use error::{MapperError, PlacementError, StowerError, StowerResult};
pub use infrastructure::mappers::{ExternalMapper, FnMapper, IfcbMapper, MtimeMapper};

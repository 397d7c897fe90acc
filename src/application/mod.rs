//! Application Layer
//!
//! Use cases that orchestrate the placement flow.
//! This layer:
//! - Depends on Domain layer (services, ports, value objects)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `process` - Batch mode: walk the source tree once
//! - `WatchUseCase` - Watch mode: place files as notifications arrive
//!
//! ## Services
//!
//! - `PlacementPipeline` - Scope, mapper, destination and placement for one file
//! - `PlacementEngine` - Idempotent link/copy with dry-run gating
//! - `MapperRegistry` - Startup-time mapper lookup

pub mod pipeline;
pub mod placement;
pub mod process;
pub mod registry;
pub mod report;
pub mod watch;

pub use pipeline::{FileOutcome, IgnoreReason, PlacementPipeline};
pub use placement::{PlacementAction, PlacementEngine, PlacementOptions};
pub use process::{process, process_tree};
pub use registry::{MapperRegistry, MTIME};
pub use report::RunReport;
pub use watch::{FileEvent, FileEventKind, WatchEvent, WatchUseCase};

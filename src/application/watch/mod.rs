//! Watch Use Case
//!
//! Continuous placement driven by file system notifications:
//! - Recursive watch on the source root (via `notify` crate)
//! - Create and write events go through a bounded, drop-on-full queue
//! - One consumer runs each event through the placement pipeline
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(settings, mapper);
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod queue;
mod use_case;


pub use event::{classify, FileEvent, FileEventKind, WatchEvent};
pub use queue::{event_queue, EventReceiver, EventSender};
pub use use_case::{WatchUseCase, POLL_INTERVAL};

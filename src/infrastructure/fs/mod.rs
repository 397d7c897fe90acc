//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;
#[cfg(test)]
mod recording;

pub use local::LocalFs;
#[cfg(test)]
pub use recording::{FsOperation, RecordingFs};

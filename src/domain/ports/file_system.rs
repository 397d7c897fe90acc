//! FileSystem port - abstraction over the mutating file operations
//!
//! The placement engine only touches the disk through this trait, so a
//! dry run can be checked against a recording implementation.

use std::io;
use std::path::Path;

use crate::domain::value_objects::FileStat;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `RecordingFs` - wraps `LocalFs` and records mutations (tests only)
pub trait FileSystem {
    /// Stat a path, following symlinks. `Ok(None)` when nothing exists there.
    fn stat(&self, path: &Path) -> io::Result<Option<FileStat>>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Create a hard link at `destination` pointing to `source`
    fn hard_link(&self, source: &Path, destination: &Path) -> io::Result<()>;

    /// Copy file content byte for byte, returning the number of bytes copied
    fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64>;
}

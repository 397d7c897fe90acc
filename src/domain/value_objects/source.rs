//! Source File Reference
//!
//! One observed file below the source root, with the metadata the
//! pipeline cares about: filesystem identity and modification time.

use std::fs::Metadata;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// Device + inode pair identifying a file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileIdentity {
    pub device: u64,
    pub inode: u64,
}

impl FileIdentity {
    #[cfg(unix)]
    pub fn from_metadata(metadata: &Metadata) -> Option<Self> {
        use std::os::unix::fs::MetadataExt;
        Some(Self {
            device: metadata.dev(),
            inode: metadata.ino(),
        })
    }

    /// Identity is unknown on this platform, so no two files compare equal.
    #[cfg(not(unix))]
    pub fn from_metadata(_metadata: &Metadata) -> Option<Self> {
        None
    }
}

/// The subset of file metadata used for placement decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub identity: Option<FileIdentity>,
    pub modified: Option<SystemTime>,
    pub is_dir: bool,
}

impl FileStat {
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            identity: FileIdentity::from_metadata(metadata),
            modified: metadata.modified().ok(),
            is_dir: metadata.is_dir(),
        }
    }

    /// True when both sides have a known identity and it matches.
    pub fn same_file(&self, other: &FileStat) -> bool {
        match (self.identity, other.identity) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// A file observed under the source root
///
/// Created once per pipeline invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReference {
    absolute: PathBuf,
    relative: String,
    base_name: String,
    stat: FileStat,
}

impl SourceReference {
    /// Build a reference for `absolute`, which must lie below `root`.
    ///
    /// Returns `None` when `absolute` is not inside `root`, names the root
    /// itself, or has a component below `root` that is not valid UTF-8.
    pub fn new(root: &Path, absolute: &Path, stat: FileStat) -> Option<Self> {
        let relative = relative_slash_path(root, absolute)?;
        let base_name = absolute.file_name()?.to_str()?.to_string();
        Some(Self {
            absolute: absolute.to_path_buf(),
            relative,
            base_name,
            stat,
        })
    }

    /// Absolute path of the source file
    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    /// Path relative to the source root, `/`-separated
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// Final path component
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn stat(&self) -> &FileStat {
        &self.stat
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.stat.modified
    }

    pub fn identity(&self) -> Option<FileIdentity> {
        self.stat.identity
    }
}

/// Relative path of `path` under `root` joined with `/`.
///
/// `None` when `path` is outside `root`, equal to it, or not valid UTF-8
/// below it. Names are never converted lossily, so two distinct files
/// cannot collapse onto one relative path.
pub(crate) fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let rest = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in rest.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

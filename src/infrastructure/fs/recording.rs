//! Recording file system for tests
//!
//! Delegates to `LocalFs` and keeps a log of every mutating call.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::FileStat;

use super::LocalFs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOperation {
    CreateDirAll(PathBuf),
    RemoveFile(PathBuf),
    HardLink(PathBuf, PathBuf),
    Copy(PathBuf, PathBuf),
}

/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Debug, Clone, Default)]
pub struct RecordingFs {
    inner: LocalFs,
    operations: Arc<Mutex<Vec<FsOperation>>>,
}

impl RecordingFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operations(&self) -> Vec<FsOperation> {
        self.operations.lock().unwrap().clone()
    }

    fn record(&self, operation: FsOperation) {
        self.operations.lock().unwrap().push(operation);
    }
}

impl FileSystem for RecordingFs {
    fn stat(&self, path: &Path) -> io::Result<Option<FileStat>> {
        self.inner.stat(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.record(FsOperation::CreateDirAll(path.to_path_buf()));
        self.inner.create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.record(FsOperation::RemoveFile(path.to_path_buf()));
        self.inner.remove_file(path)
    }

    fn hard_link(&self, source: &Path, destination: &Path) -> io::Result<()> {
        self.record(FsOperation::HardLink(
            source.to_path_buf(),
            destination.to_path_buf(),
        ));
        self.inner.hard_link(source, destination)
    }

    fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64> {
        self.record(FsOperation::Copy(
            source.to_path_buf(),
            destination.to_path_buf(),
        ));
        self.inner.copy(source, destination)
    }
}

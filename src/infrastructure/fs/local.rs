//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io;
use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::FileStat;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn stat(&self, path: &Path) -> io::Result<Option<FileStat>> {
        match std::fs::metadata(path) {
            Ok(metadata) => Ok(Some(FileStat::from_metadata(&metadata))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn hard_link(&self, source: &Path, destination: &Path) -> io::Result<()> {
        std::fs::hard_link(source, destination)
    }

    fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64> {
        std::fs::copy(source, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_stat_missing_is_none() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        assert!(fs.stat(&dir.path().join("missing.txt")).unwrap().is_none());
    }

    #[test]
    fn local_fs_stat_reports_directories() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        let stat = fs.stat(dir.path()).unwrap().unwrap();
        assert!(stat.is_dir);
    }

    #[test]
    fn local_fs_create_dir_all() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        let fs = LocalFs::new();

        fs.create_dir_all(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn local_fs_copy_creates_independent_file() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source.txt");
        let copy = dir.path().join("copy.txt");
        std::fs::write(&source, "hello").unwrap();
        let fs = LocalFs::new();

        let bytes = fs.copy(&source, &copy).unwrap();

        assert_eq!(bytes, 5);
        assert_eq!(std::fs::read_to_string(&copy).unwrap(), "hello");
        let a = fs.stat(&source).unwrap().unwrap();
        let b = fs.stat(&copy).unwrap().unwrap();
        assert!(!a.same_file(&b));
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_hard_link_shares_identity() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source.txt");
        let link = dir.path().join("link.txt");
        std::fs::write(&source, "hello").unwrap();
        let fs = LocalFs::new();

        fs.hard_link(&source, &link).unwrap();

        let a = fs.stat(&source).unwrap().unwrap();
        let b = fs.stat(&link).unwrap().unwrap();
        assert!(a.same_file(&b));
    }

    #[test]
    fn local_fs_remove() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("remove.txt");
        std::fs::write(&file, "content").unwrap();
        let fs = LocalFs::new();

        fs.remove_file(&file).unwrap();

        assert!(!file.exists());
    }
}

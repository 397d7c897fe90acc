//! Destination Resolver
//!
//! Joins the destination root, the matched scope's destination prefix and
//! the mapper result, then verifies the result stays inside its root:
//! - No escape through `..` segments
//! - No absolute mapper results
//! - Strictly below the scope's destination prefix when a scope matched

use std::path::{Component, Path, PathBuf};

use crate::domain::ports::MapperError;
use crate::domain::services::ScopeMatch;
use crate::error::PlacementError;

#[derive(Debug, Clone)]
pub struct DestinationResolver {
    root: PathBuf,
}

impl DestinationResolver {
    /// `root` should be absolute; it is normalized lexically.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            root: normalize_lexically(root).unwrap_or_else(|| root.to_path_buf()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compute the absolute destination for a mapper result.
    pub fn resolve(
        &self,
        mapped: &str,
        scope: Option<&ScopeMatch>,
    ) -> Result<PathBuf, PlacementError> {
        if mapped.trim().is_empty() {
            return Err(MapperError::EmptyResult.into());
        }

        let mapped = Path::new(mapped);
        if mapped.has_root() || mapped.is_absolute() {
            return Err(self.escape(mapped.to_path_buf(), &self.root));
        }

        let scope_root = match scope {
            Some(m) if !m.destination_prefix.is_empty() => {
                let joined = self.root.join(&m.destination_prefix);
                let normalized = normalize_lexically(&joined)
                    .ok_or_else(|| self.escape(joined.clone(), &self.root))?;
                if !is_strictly_inside(&normalized, &self.root) {
                    return Err(self.escape(normalized, &self.root));
                }
                normalized
            }
            _ => self.root.clone(),
        };

        let joined = scope_root.join(mapped);
        let destination = normalize_lexically(&joined).ok_or_else(|| self.escape(joined, &scope_root))?;

        if !is_strictly_inside(&destination, &self.root) {
            return Err(self.escape(destination, &self.root));
        }
        if !is_strictly_inside(&destination, &scope_root) {
            return Err(self.escape(destination, &scope_root));
        }

        Ok(destination)
    }

    fn escape(&self, path: PathBuf, root: &Path) -> PlacementError {
        PlacementError::Containment {
            path,
            root: root.to_path_buf(),
        }
    }
}

fn is_strictly_inside(path: &Path, root: &Path) -> bool {
    path != root && path.starts_with(root)
}

/// Resolve `.` and `..` without touching the file system.
///
/// Returns `None` when a `..` would climb above the start of the path.
pub fn normalize_lexically(path: &Path) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return None;
                }
                normalized.pop();
                depth -= 1;
            }
            Component::Normal(part) => {
                normalized.push(part);
                depth += 1;
            }
        }
    }

    Some(normalized)
}

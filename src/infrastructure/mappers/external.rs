//! External process mapper
//!
//! Runs an executable with five positional arguments:
//!
//! 1. source path relative to the source root
//! 2. absolute source path
//! 3. base file name
//! 4. matched scope source prefix (empty when unscoped)
//! 5. matched scope destination prefix (empty when unscoped)
//!
//! The first line of standard output is the destination path. No timeout is
//! applied; a hung executable stalls the pipeline.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::ports::{first_line, MapRequest, MapperError, PathMapper};

#[derive(Debug, Clone)]
pub struct ExternalMapper {
    name: String,
    executable: PathBuf,
}

impl ExternalMapper {
    /// `name` is the reference the user configured, `executable` what runs.
    pub fn new(name: impl Into<String>, executable: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    fn failure(&self, request: &MapRequest<'_>, reason: String) -> MapperError {
        MapperError::External {
            executable: self.executable.display().to_string(),
            relative: request.relative().to_string(),
            reason,
        }
    }
}

impl PathMapper for ExternalMapper {
    fn name(&self) -> &str {
        &self.name
    }

    fn map(&self, request: &MapRequest<'_>) -> Result<String, MapperError> {
        let output = Command::new(&self.executable)
            .arg(request.relative())
            .arg(request.absolute())
            .arg(request.base_name())
            .arg(request.scope_source_prefix())
            .arg(request.scope_destination_prefix())
            .output()
            .map_err(|e| self.failure(request, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = first_line(stderr.trim());
            let reason = if detail.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, detail)
            };
            return Err(self.failure(request, reason));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| self.failure(request, "output is not valid UTF-8".to_string()))?;
        Ok(first_line(&stdout).to_string())
    }
}

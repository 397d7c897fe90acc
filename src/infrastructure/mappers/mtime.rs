//! Modification-time mapper
//!
//! Places a file under a directory named after its modification time,
//! e.g. `2024/03/05/report.csv` with the default pattern.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use crate::domain::ports::{MapRequest, MapperError, PathMapper};
use crate::error::{StowerError, StowerResult};

/// strftime pattern used when none is configured
pub const DEFAULT_MTIME_FORMAT: &str = "%Y/%m/%d/";

#[derive(Debug, Clone)]
pub struct MtimeMapper {
    name: String,
    format: String,
}

impl MtimeMapper {
    /// Build a mapper for a strftime pattern; a trailing `/` is added if missing.
    pub fn new(name: impl Into<String>, format: &str) -> StowerResult<Self> {
        let mut format = if format.is_empty() {
            DEFAULT_MTIME_FORMAT.to_string()
        } else {
            format.to_string()
        };
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(StowerError::config(format!(
                "invalid modification time format '{}'",
                format
            )));
        }
        if !format.ends_with('/') {
            format.push('/');
        }
        Ok(Self {
            name: name.into(),
            format,
        })
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl PathMapper for MtimeMapper {
    fn name(&self) -> &str {
        &self.name
    }

    fn map(&self, request: &MapRequest<'_>) -> Result<String, MapperError> {
        let modified = request
            .source
            .modified()
            .ok_or_else(|| MapperError::MissingModified {
                path: request.absolute().to_path_buf(),
            })?;
        let local: DateTime<Local> = modified.into();
        Ok(format!("{}{}", local.format(&self.format), request.base_name()))
    }
}

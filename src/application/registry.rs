//! Mapper Registry
//!
//! Name-keyed table of mappers, built once at startup and only read after.
//! A name that is not registered is looked up as an executable on `PATH`
//! and wrapped in an [`ExternalMapper`].

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::PathMapper;
use crate::error::{StowerError, StowerResult};
use crate::infrastructure::mappers::{pass_through, ExternalMapper, IfcbMapper, MtimeMapper};

/// Registry name of the modification-time mapper
pub const MTIME: &str = "mtime";

#[derive(Default, Clone)]
pub struct MapperRegistry {
    mappers: BTreeMap<String, Arc<dyn PathMapper>>,
}

impl MapperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the mappers that ship with Stower.
    pub fn builtin(mtime_format: Option<&str>) -> StowerResult<Self> {
        let mut registry = Self::new();
        registry.register(pass_through());
        registry.register(MtimeMapper::new(MTIME, mtime_format.unwrap_or_default())?);
        registry.register(IfcbMapper::new());
        Ok(registry)
    }

    /// Add a mapper under its own name, replacing any previous one.
    pub fn register(&mut self, mapper: impl PathMapper + 'static) {
        self.mappers
            .insert(mapper.name().to_string(), Arc::new(mapper));
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.mappers.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn PathMapper>> {
        self.mappers.get(name).cloned()
    }

    /// Select the mapper for this run.
    ///
    /// Without a name the only registered mapper is used; with several
    /// registered a name is required.
    pub fn resolve(&self, name: Option<&str>) -> StowerResult<Arc<dyn PathMapper>> {
        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name,
            None => {
                if self.mappers.len() == 1 {
                    if let Some(mapper) = self.mappers.values().next() {
                        return Ok(Arc::clone(mapper));
                    }
                }
                return Err(StowerError::NoMapperSelected {
                    valid: self.valid_names(),
                });
            }
        };

        if let Some(mapper) = self.get(name) {
            return Ok(mapper);
        }

        match which::which(name) {
            Ok(executable) => {
                debug!(
                    mapper = name,
                    executable = %executable.display(),
                    "using external mapper"
                );
                Ok(Arc::new(ExternalMapper::new(name, executable)))
            }
            Err(e) => {
                debug!(mapper = name, "no executable found: {}", e);
                Err(StowerError::MapperNotFound {
                    name: name.to_string(),
                    valid: self.valid_names(),
                })
            }
        }
    }

    fn valid_names(&self) -> String {
        self.names().join(", ")
    }
}

impl std::fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapperRegistry")
            .field("mappers", &self.names())
            .finish()
    }
}
